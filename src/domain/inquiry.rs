// src/domain/inquiry.rs

use std::collections::HashMap;
use thiserror::Error;

use crate::data::forms::{
    BATHROOM_OPTIONS, BEDROOM_OPTIONS, BUDGET_OPTIONS, HEAR_OPTIONS, INQUIRY_OPTIONS,
    INQUIRY_LOCATION_OPTIONS, INQUIRY_TYPE_OPTIONS,
};
use crate::data::{find_property, SelectOption};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid value for {0}")]
    InvalidField(&'static str),
}

/// Decoded `application/x-www-form-urlencoded` body.
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        let values = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.trim().to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Checkbox semantics: present and not "false".
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key).map(String::as_str), Some(v) if !v.is_empty() && v != "false")
    }

    fn required(&self, keys: &[&'static str], missing: &mut Vec<&'static str>) {
        for key in keys {
            if self.get(key).is_empty() {
                missing.push(*key);
            }
        }
    }

    fn agreed(&self, missing: &mut Vec<&'static str>) {
        if !self.flag("agreed") {
            missing.push("agreed");
        }
    }

    /// Empty is allowed; anything else must be one of `options`.
    fn choice(&self, key: &'static str, options: &[SelectOption]) -> Result<String, InquiryError> {
        let value = self.get(key);
        if value.is_empty() || options.iter().any(|o| o.value == value) {
            Ok(value.to_string())
        } else {
            Err(InquiryError::InvalidField(key))
        }
    }
}

fn finish(missing: Vec<&'static str>) -> Result<(), InquiryError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(InquiryError::MissingFields(missing))
    }
}

fn check_email(email: &str) -> Result<(), InquiryError> {
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(InquiryError::InvalidField("email")),
    }
}

/// "Let's Connect" form on the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub hear_about: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn from_form(form: &FormFields) -> Result<Self, InquiryError> {
        let mut missing = Vec::new();
        form.required(&["first_name", "last_name", "email", "message"], &mut missing);
        form.agreed(&mut missing);
        finish(missing)?;
        check_email(form.get("email"))?;

        Ok(Self {
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
            inquiry_type: form.choice("inquiry_type", INQUIRY_OPTIONS)?,
            hear_about: form.choice("hear_about", HEAR_OPTIONS)?,
            message: form.get("message").to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Phone,
    Email,
}

impl ContactMethod {
    fn parse(raw: &str) -> Result<Self, InquiryError> {
        match raw {
            "" | "phone" => Ok(ContactMethod::Phone),
            "email" => Ok(ContactMethod::Email),
            _ => Err(InquiryError::InvalidField("contact_method")),
        }
    }
}

/// "Let's Make it Happen" form on the properties page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub property_type: String,
    pub bathrooms: String,
    pub bedrooms: String,
    pub budget: String,
    pub contact_method: ContactMethod,
    pub message: String,
}

impl PropertyInquiry {
    pub fn from_form(form: &FormFields) -> Result<Self, InquiryError> {
        let mut missing = Vec::new();
        form.required(&["first_name", "last_name", "email"], &mut missing);
        form.agreed(&mut missing);
        finish(missing)?;
        check_email(form.get("email"))?;

        Ok(Self {
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
            location: form.choice("location", INQUIRY_LOCATION_OPTIONS)?,
            property_type: form.choice("property_type", INQUIRY_TYPE_OPTIONS)?,
            bathrooms: form.choice("bathrooms", BATHROOM_OPTIONS)?,
            bedrooms: form.choice("bedrooms", BEDROOM_OPTIONS)?,
            budget: form.choice("budget", BUDGET_OPTIONS)?,
            contact_method: ContactMethod::parse(form.get("contact_method"))?,
            message: form.get("message").to_string(),
        })
    }
}

/// Inquiry about one specific property, sent from its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDetailsInquiry {
    pub property_id: &'static str,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl PropertyDetailsInquiry {
    pub fn from_form(form: &FormFields) -> Result<Self, InquiryError> {
        let mut missing = Vec::new();
        form.required(&["property_id", "first_name", "last_name", "email"], &mut missing);
        form.agreed(&mut missing);
        finish(missing)?;
        check_email(form.get("email"))?;

        let property = find_property(form.get("property_id"))
            .ok_or(InquiryError::InvalidField("property_id"))?;

        Ok(Self {
            property_id: property.id,
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
            message: form.get("message").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(body: &str) -> FormFields {
        FormFields::parse(body.as_bytes())
    }

    #[test]
    fn parses_urlencoded_body() {
        let f = form("first_name=Ana+Mar%C3%ADa&message=Hello%2C+world&agreed=on");
        assert_eq!(f.get("first_name"), "Ana María");
        assert_eq!(f.get("message"), "Hello, world");
        assert!(f.flag("agreed"));
        assert!(!f.flag("missing"));
        assert!(!form("agreed=false").flag("agreed"));
    }

    #[test]
    fn contact_requires_core_fields_and_agreement() {
        let err = ContactInquiry::from_form(&form("first_name=Ana&email=a%40b.com")).unwrap_err();
        assert_eq!(
            err,
            InquiryError::MissingFields(vec!["last_name", "message", "agreed"])
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: last_name, message, agreed"
        );
    }

    #[test]
    fn contact_accepts_complete_form() {
        let inquiry = ContactInquiry::from_form(&form(
            "first_name=Ana&last_name=Lee&email=ana%40example.com&message=Hi&inquiry_type=buying&hear_about=google&agreed=on",
        ))
        .unwrap();
        assert_eq!(inquiry.first_name, "Ana");
        assert_eq!(inquiry.inquiry_type, "buying");
        assert_eq!(inquiry.phone, "");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = ContactInquiry::from_form(&form(
            "first_name=+++&last_name=Lee&email=ana%40example.com&message=Hi&agreed=on",
        ))
        .unwrap_err();
        assert_eq!(err, InquiryError::MissingFields(vec!["first_name"]));
    }

    #[test]
    fn rejects_bad_email_and_unknown_option() {
        let err = ContactInquiry::from_form(&form(
            "first_name=Ana&last_name=Lee&email=nope&message=Hi&agreed=on",
        ))
        .unwrap_err();
        assert_eq!(err, InquiryError::InvalidField("email"));

        let err = ContactInquiry::from_form(&form(
            "first_name=Ana&last_name=Lee&email=a%40b.c&message=Hi&agreed=on&inquiry_type=bribery",
        ))
        .unwrap_err();
        assert_eq!(err, InquiryError::InvalidField("inquiry_type"));
    }

    #[test]
    fn property_inquiry_defaults_to_phone() {
        let inquiry = PropertyInquiry::from_form(&form(
            "first_name=Ana&last_name=Lee&email=a%40b.c&budget=300%2B&agreed=on",
        ))
        .unwrap();
        assert_eq!(inquiry.contact_method, ContactMethod::Phone);
        assert_eq!(inquiry.budget, "300+");

        let err = PropertyInquiry::from_form(&form(
            "first_name=Ana&last_name=Lee&email=a%40b.c&contact_method=pigeon&agreed=on",
        ))
        .unwrap_err();
        assert_eq!(err, InquiryError::InvalidField("contact_method"));
    }

    #[test]
    fn details_inquiry_needs_known_property() {
        let ok = PropertyDetailsInquiry::from_form(&form(
            "property_id=metropolitan-haven&first_name=Ana&last_name=Lee&email=a%40b.c&agreed=on",
        ))
        .unwrap();
        assert_eq!(ok.property_id, "metropolitan-haven");

        let err = PropertyDetailsInquiry::from_form(&form(
            "property_id=castle&first_name=Ana&last_name=Lee&email=a%40b.c&agreed=on",
        ))
        .unwrap_err();
        assert_eq!(err, InquiryError::InvalidField("property_id"));
    }
}
