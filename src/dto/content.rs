use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{BlogPost, PodcastEpisode};

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogList {
    pub items: Vec<BlogPost>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PodcastList {
    pub items: Vec<PodcastEpisode>,
}
