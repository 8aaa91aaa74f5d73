use clap::crate_version;
use maud::{html, Markup, Render};

use crate::predictor::{Prediction, PredictionRequest, ValidationError};

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/css/all.min.css" integrity="sha512-iBBXm8fW90+nuLcSKlbmrPcLa0OT92xO1BIsZ+ywDWZCvqsWgccV3gFoRBv0z+8dLJgyAHIhR35VZc2oM/gI1w==" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}

pub fn icon_text(class: &str, text: &str) -> Markup {
    html! {
        span.icon-text.is-flex-wrap-nowrap {
            span.icon { i class=(class) {} }
            span { (text) }
        }
    }
}

/// The prediction form, pre-filled with the last submitted values.
pub struct PredictionForm<'a>(pub &'a PredictionRequest);

impl Render for PredictionForm<'_> {
    fn render(&self) -> Markup {
        html! {
            form action="/" method="POST" {
                (number_field("distance", "Distance to Transit Station (meters)", "fas fa-bus", self.0.distance))
                (number_field("store_count", "Number of Convenience Stores", "fas fa-store", self.0.store_count))
                (number_field("latitude", "Latitude", "fas fa-globe-asia", self.0.latitude))
                (number_field("longitude", "Longitude", "fas fa-globe-asia", self.0.longitude))
                div.field.has-text-centered {
                    div.control {
                        button.button.is-link.is-rounded type="submit" {
                            span.icon { i.fas.fa-calculator {} }
                            span { "Predict Price" }
                        }
                    }
                }
            }
        }
    }
}

fn number_field(name: &str, placeholder: &str, icon_class: &str, value: Option<f64>) -> Markup {
    html! {
        div.field {
            div.control.has-icons-left {
                input.input.is-rounded
                    type="number"
                    step="any"
                    name=(name)
                    placeholder=(placeholder)
                    aria-label=(placeholder)
                    value=[value];
                span.icon.is-left { i class=(icon_class) {} }
            }
        }
    }
}

/// Output region of the page.
pub enum PredictionOutput {
    /// The form has never been submitted.
    NotSubmitted,

    Predicted(Prediction),
    Invalid(ValidationError),
}

impl From<Result<Prediction, ValidationError>> for PredictionOutput {
    fn from(result: Result<Prediction, ValidationError>) -> Self {
        match result {
            Ok(prediction) => Self::Predicted(prediction),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl Render for PredictionOutput {
    fn render(&self) -> Markup {
        html! {
            div id="prediction-output" class="has-text-centered is-size-5 mt-5" {
                @match self {
                    Self::NotSubmitted => {}
                    Self::Predicted(prediction) => {
                        strong.has-text-success { (icon_text("fas fa-coins", &prediction.to_string())) }
                    }
                    Self::Invalid(error) => {
                        span.has-text-danger { (icon_text("fas fa-exclamation-circle", &error.to_string())) }
                    }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.content.has-text-centered {
                p {
                    "Real Estate Price Predictor " (crate_version!())
                    " · built with " a href="https://www.rust-lang.org/" { "Rust" }
                    " and " a href="https://bulma.io/" { "Bulma" }
                }
            }
        }
    }
}
