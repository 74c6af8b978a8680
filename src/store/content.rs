use tokio::sync::RwLock;

use crate::models::{BlogPost, PodcastEpisode};

/// Editorial content fetched from the external service at startup.
/// Listings read newest-first.
pub struct ContentStore {
    posts: RwLock<Vec<BlogPost>>,
    episodes: RwLock<Vec<PodcastEpisode>>,
}

impl ContentStore {
    pub fn new(posts: Vec<BlogPost>, episodes: Vec<PodcastEpisode>) -> Self {
        Self {
            posts: RwLock::new(posts),
            episodes: RwLock::new(episodes),
        }
    }

    pub async fn posts(&self) -> Vec<BlogPost> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    pub async fn episodes(&self) -> Vec<PodcastEpisode> {
        let mut episodes = self.episodes.read().await.clone();
        episodes.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        episodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn posts_list_newest_first() {
        let old = BlogPost {
            id: Uuid::new_v4(),
            title: "Spring catalogue".to_string(),
            excerpt: None,
            body: "…".to_string(),
            published_at: Utc::now() - Duration::days(30),
        };
        let fresh = BlogPost {
            id: Uuid::new_v4(),
            title: "Autumn catalogue".to_string(),
            excerpt: None,
            body: "…".to_string(),
            published_at: Utc::now(),
        };
        let store = ContentStore::new(vec![old, fresh], vec![]);
        let posts = store.posts().await;
        assert_eq!(posts[0].title, "Autumn catalogue");
    }
}
