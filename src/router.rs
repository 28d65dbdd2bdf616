use astra::Request;

use crate::data::{find_property, PROPERTIES};
use crate::domain::filter::{filter_properties, PropertyQuery};
use crate::domain::inquiry::{
    ContactInquiry, FormFields, InquiryError, PropertyDetailsInquiry, PropertyInquiry,
};
use crate::domain::listing::Property;
use crate::errors::ServerError;
use crate::request::{cookies, read_body, viewport_width, Query};
use crate::responses::{
    html_response, json_response, redirect_response, static_file_response, text_response,
    ResultResp,
};
use crate::state::AppState;
use crate::templates::{self, PageCtx};

const BANNER_COOKIE: &str = "banner";
const BANNER_DISMISSED: &str = "dismissed";

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = Query::from_request(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/healthz") => text_response("ok"),
        ("GET", "/banner/dismiss") => {
            let cookie = format!("{BANNER_COOKIE}={BANNER_DISMISSED}; Path=/; Max-Age=31536000; SameSite=Lax");
            redirect_response("/", Some(cookie.as_str()))
        }
        ("GET", p) if p.starts_with("/static/") => {
            static_file_response(&state.static_dir, &p["/static/".len()..])
        }
        ("GET", "/api/properties") => {
            let filter = PropertyQuery::from_pairs(query.pairs());
            json_response(&filter_properties(PROPERTIES, &filter))
        }

        ("GET", "/") => html_response(templates::pages::home_page(&page_ctx(&req, &path, query, state))),
        ("GET", "/about") => html_response(templates::pages::about_page(&page_ctx(&req, &path, query, state))),
        ("GET", "/services") => {
            html_response(templates::pages::services_page(&page_ctx(&req, &path, query, state)))
        }
        ("GET", "/contact") => {
            html_response(templates::pages::contact_page(&page_ctx(&req, &path, query, state)))
        }
        ("GET", "/properties") => {
            html_response(templates::pages::properties_page(&page_ctx(&req, &path, query, state)))
        }

        ("POST", "/contact") => {
            let form = read_form(&mut req)?;
            let inquiry = ContactInquiry::from_form(&form).map_err(rejected)?;
            tracing::info!(
                email = %inquiry.email,
                inquiry_type = %inquiry.inquiry_type,
                "contact inquiry received"
            );
            let ctx = page_ctx(&req, &path, query, state);
            html_response(templates::pages::thanks_page(&ctx, &inquiry.first_name, "your inquiry"))
        }
        ("POST", "/properties/inquiry") => {
            let form = read_form(&mut req)?;
            let inquiry = PropertyInquiry::from_form(&form).map_err(rejected)?;
            tracing::info!(
                email = %inquiry.email,
                property_type = %inquiry.property_type,
                budget = %inquiry.budget,
                contact_method = ?inquiry.contact_method,
                "property inquiry received"
            );
            let ctx = page_ctx(&req, &path, query, state);
            html_response(templates::pages::thanks_page(&ctx, &inquiry.first_name, "finding a property"))
        }

        (_, "/properties/inquiry") => Err(ServerError::MethodNotAllowed),
        (method, p) if p.starts_with("/properties/") => {
            let rest = &p["/properties/".len()..];
            let (id, tail) = match rest.split_once('/') {
                Some((id, tail)) => (id, Some(tail)),
                None => (rest, None),
            };
            let property = lookup(id)?;

            match (method, tail) {
                ("GET", None) => {
                    let ctx = page_ctx(&req, &path, query, state);
                    html_response(templates::pages::property_details_page(&ctx, property))
                }
                ("POST", Some("inquiry")) => {
                    let form = read_form(&mut req)?;
                    let inquiry = PropertyDetailsInquiry::from_form(&form).map_err(rejected)?;
                    if inquiry.property_id != property.id {
                        return Err(ServerError::BadRequest(
                            "property_id does not match the listing".into(),
                        ));
                    }
                    tracing::info!(
                        email = %inquiry.email,
                        property = inquiry.property_id,
                        "property details inquiry received"
                    );
                    let ctx = page_ctx(&req, &path, query, state);
                    html_response(templates::pages::thanks_page(&ctx, &inquiry.first_name, property.title))
                }
                (_, None) | (_, Some("inquiry")) => Err(ServerError::MethodNotAllowed),
                _ => Err(ServerError::NotFound),
            }
        }

        (_, p) if is_known_path(p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn is_known_path(path: &str) -> bool {
    matches!(
        path,
        "/" | "/about"
            | "/services"
            | "/contact"
            | "/properties"
            | "/properties/inquiry"
            | "/api/properties"
            | "/healthz"
            | "/banner/dismiss"
    )
}

fn lookup(id: &str) -> Result<&'static Property, ServerError> {
    find_property(id).ok_or(ServerError::NotFound)
}

fn read_form(req: &mut Request) -> Result<FormFields, ServerError> {
    let body = read_body(req)?;
    Ok(FormFields::parse(&body))
}

fn rejected(err: InquiryError) -> ServerError {
    ServerError::BadRequest(err.to_string())
}

fn page_ctx(req: &Request, path: &str, query: Query, state: &AppState) -> PageCtx {
    let width = viewport_width(req, &query, state.default_viewport_width);
    let mut ctx = PageCtx::new(path, query, width);
    ctx.show_banner = cookies(req)
        .get(BANNER_COOKIE)
        .map_or(true, |v| v != BANNER_DISMISSED);
    ctx
}
