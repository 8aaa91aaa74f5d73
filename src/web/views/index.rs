use maud::{html, Markup, DOCTYPE};
use poem::handler;
use poem::web::{Data, Form, Html};

use crate::predictor::{PredictionRequest, Predictor};
use crate::prelude::*;
use crate::web::partials::*;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get() -> Html<String> {
    Html(render(&PredictionRequest::default(), &PredictionOutput::NotSubmitted).into_string())
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(
    Form(request): Form<PredictionRequest>,
    Data(predictor): Data<&Arc<Predictor>>,
) -> Html<String> {
    let output = PredictionOutput::from(predictor.predict(&request));
    match &output {
        PredictionOutput::Predicted(prediction) => debug!(?request, prediction = prediction.0),
        _ => debug!(?request, "incomplete request"),
    }
    Html(render(&request, &output).into_string())
}

fn render(request: &PredictionRequest, output: &PredictionOutput) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { "Real Estate Price Predictor" }
            }
            body {
                section.section {
                    div.container {
                        div.columns.is-centered {
                            div.column."is-6" {
                                div.box {
                                    h1.title.has-text-centered.has-text-link {
                                        (icon_text("fas fa-home", "Real Estate Price Prediction"))
                                    }
                                    (PredictionForm(request))
                                    (output)
                                }
                            }
                        }
                    }
                }
                (footer())
            }
        }
    }
}
