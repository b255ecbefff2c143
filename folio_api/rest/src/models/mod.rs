use serde::Serialize;

pub mod contact;
pub mod site;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
