use serde::Deserialize;

use crate::core::filter::Selector;
use crate::core::models::application::{ApplicationId, ApplicationStatus, ApplicationType};

#[derive(Debug, Default, Deserialize)]
pub struct ListFilter {
    #[serde(default, rename = "type")]
    pub type_: Selector<ApplicationType>,
    #[serde(default)]
    pub status: Selector<ApplicationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub id: ApplicationId,
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: ApplicationId,
}

#[derive(Deserialize)]
pub struct Login {
    pub password: String,
}
