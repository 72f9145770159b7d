// Builders for the create commands, seeded with values that pass every check.

use crate::modules::distributions::use_cases::create_distribution::command::CreateDistribution;
use crate::modules::episodes::use_cases::create_episode::command::CreateEpisode;
use crate::modules::shows::use_cases::create_show::command::CreateShow;

pub struct CreateShowBuilder {
    inner: CreateShow,
}

impl Default for CreateShowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateShowBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateShow {
                title: "Gopher Talk".to_string(),
                slug: "gopher-talk".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn slug(mut self, v: impl Into<String>) -> Self {
        self.inner.slug = v.into();
        self
    }

    pub fn build(self) -> CreateShow {
        self.inner
    }
}

pub struct CreateEpisodeBuilder {
    inner: CreateEpisode,
}

#[allow(dead_code)]
impl CreateEpisodeBuilder {
    pub fn new(show_id: impl Into<String>) -> Self {
        Self {
            inner: CreateEpisode {
                show_id: show_id.into(),
                title: "Pilot".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn build(self) -> CreateEpisode {
        self.inner
    }
}

pub struct CreateDistributionBuilder {
    inner: CreateDistribution,
}

#[allow(dead_code)]
impl CreateDistributionBuilder {
    pub fn new(show_id: impl Into<String>) -> Self {
        Self {
            inner: CreateDistribution {
                show_id: show_id.into(),
                title: "Main feed".to_string(),
                slug: "main-feed".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn slug(mut self, v: impl Into<String>) -> Self {
        self.inner.slug = v.into();
        self
    }

    pub fn build(self) -> CreateDistribution {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = CreateShowBuilder::default().build();
        assert_eq!(built, CreateShowBuilder::new().build());
        assert_eq!(built.title, "Gopher Talk");
        assert_eq!(built.slug, "gopher-talk");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let show = CreateShowBuilder::new().title("T").slug("s").build();
        let episode = CreateEpisodeBuilder::new("s-1").title("E").build();
        let distribution = CreateDistributionBuilder::new("s-1")
            .title("D")
            .slug("d")
            .build();

        assert_eq!((show.title.as_str(), show.slug.as_str()), ("T", "s"));
        assert_eq!((episode.show_id.as_str(), episode.title.as_str()), ("s-1", "E"));
        assert_eq!(
            (
                distribution.show_id.as_str(),
                distribution.title.as_str(),
                distribution.slug.as_str()
            ),
            ("s-1", "D", "d")
        );
    }
}
