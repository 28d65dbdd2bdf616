use maud::{html, Markup};

use crate::data::forms::{
    BATHROOM_OPTIONS, BEDROOM_OPTIONS, BUDGET_OPTIONS, HEAR_OPTIONS, INQUIRY_LOCATION_OPTIONS,
    INQUIRY_OPTIONS, INQUIRY_TYPE_OPTIONS,
};
use crate::data::SelectOption;
use crate::domain::listing::Property;

/// `<select>` with a disabled placeholder; `selected` picks the matching option.
pub fn select(name: &str, label: &str, placeholder: &str, options: &[SelectOption], selected: &str) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            select name=(name) {
                option value="" disabled[!selected.is_empty()] selected[selected.is_empty()] { (placeholder) }
                @for o in options {
                    option value=(o.value) selected[o.value == selected] { (o.label) }
                }
            }
        }
    }
}

fn input(name: &str, label: &str, kind: &str, placeholder: &str, required: bool) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            input type=(kind) name=(name) placeholder=(placeholder) required[required];
        }
    }
}

fn name_fields() -> Markup {
    html! {
        (input("first_name", "First Name", "text", "Enter First Name", true))
        (input("last_name", "Last Name", "text", "Enter Last Name", true))
        (input("email", "Email", "email", "Enter your Email", true))
        (input("phone", "Phone", "tel", "Enter Phone Number", false))
    }
}

fn message_field(required: bool) -> Markup {
    html! {
        label class="field wide" {
            span { "Message" }
            textarea name="message" rows="5" placeholder="Enter your Message here.." required[required] {}
        }
    }
}

fn agreement(submit: &str) -> Markup {
    html! {
        div class="form-footer" {
            label class="checkbox" {
                input type="checkbox" name="agreed" required;
                span { "I agree with " a href="#" { "Terms of Use" } " and " a href="#" { "Privacy Policy" } }
            }
            button class="btn btn-primary" type="submit" { (submit) }
        }
    }
}

pub fn contact_form() -> Markup {
    html! {
        form class="inquiry-form" method="post" action="/contact" {
            (name_fields())
            (select("inquiry_type", "Inquiry Type", "Select Inquiry Type", INQUIRY_OPTIONS, ""))
            (select("hear_about", "How Did You Hear About Us?", "Select", HEAR_OPTIONS, ""))
            (message_field(true))
            (agreement("Send Your Message"))
        }
    }
}

pub fn property_inquiry_form() -> Markup {
    html! {
        form class="inquiry-form" method="post" action="/properties/inquiry" {
            (name_fields())
            (select("location", "Preferred Location", "Select Location", INQUIRY_LOCATION_OPTIONS, ""))
            (select("property_type", "Property Type", "Select Property Type", INQUIRY_TYPE_OPTIONS, ""))
            (select("bathrooms", "No. of Bathrooms", "Select no. of Bathrooms", BATHROOM_OPTIONS, ""))
            (select("bedrooms", "No. of Bedrooms", "Select no. of Bedrooms", BEDROOM_OPTIONS, ""))
            (select("budget", "Budget", "Select Budget", BUDGET_OPTIONS, ""))
            fieldset class="field" {
                legend { "Preferred Contact Method" }
                label class="radio" {
                    input type="radio" name="contact_method" value="phone" checked;
                    "Phone"
                }
                label class="radio" {
                    input type="radio" name="contact_method" value="email";
                    "Email"
                }
            }
            (message_field(false))
            (agreement("Send Your Message"))
        }
    }
}

pub fn details_inquiry_form(p: &Property) -> Markup {
    html! {
        form class="inquiry-form" method="post" action=(format!("{}/inquiry", p.href())) {
            input type="hidden" name="property_id" value=(p.id);
            (name_fields())
            label class="field wide" {
                span { "Selected Property" }
                input type="text" value=(format!("{}, {}", p.title, p.location)) readonly;
            }
            (message_field(false))
            (agreement("Send Your Message"))
        }
    }
}
