//! The fixed example dataset and the idempotent routine that loads it.
//!
//! The same routine runs at server start-up and behind
//! `POST /init/sample-data`. A profile whose username already exists is
//! skipped together with its achievements, so re-running against a populated
//! store creates nothing.

use serde::Serialize;

use crate::{
  Result,
  achievement::{AchievementDraft, AchievementFields},
  dictator::{DictatorDraft, DictatorFields},
  service::{AchievementService, DictatorService},
  store::ClubStore,
};

// ─── Dataset ─────────────────────────────────────────────────────────────────

pub struct SampleAchievement {
  pub title:       &'static str,
  pub description: &'static str,
  pub year:        i32,
}

pub struct SampleDictator {
  pub username:       &'static str,
  pub name:           &'static str,
  pub country:        &'static str,
  pub description:    &'static str,
  pub years_in_power: &'static str,
  pub achievements:   &'static [SampleAchievement],
}

impl SampleDictator {
  fn draft(&self) -> DictatorDraft {
    DictatorDraft {
      id:       None,
      username: self.username.to_owned(),
      fields:   DictatorFields {
        name:           self.name.to_owned(),
        country:        self.country.to_owned(),
        description:    Some(self.description.to_owned()),
        years_in_power: Some(self.years_in_power.to_owned()),
      },
    }
  }
}

impl SampleAchievement {
  fn fields(&self) -> AchievementFields {
    AchievementFields {
      title:       self.title.to_owned(),
      description: Some(self.description.to_owned()),
      year:        Some(self.year),
    }
  }
}

// Caesar's years are kept as plain positive integers even though both events
// are BC; `year` carries no era marker.
pub const SAMPLE_DICTATORS: &[SampleDictator] = &[
  SampleDictator {
    username:       "napoleon",
    name:           "Napoleon Bonaparte",
    country:        "France",
    description:    "Emperor of the French, military genius, and conqueror of Europe",
    years_in_power: "1799-1815",
    achievements:   &[
      SampleAchievement {
        title:       "Conquered most of Europe",
        description: "Successfully conquered and controlled most of continental Europe through military campaigns",
        year:        1807,
      },
      SampleAchievement {
        title:       "Napoleonic Code",
        description: "Created the Napoleonic Code, a civil code that influenced legal systems worldwide",
        year:        1804,
      },
    ],
  },
  SampleDictator {
    username:       "caesar",
    name:           "Julius Caesar",
    country:        "Roman Empire",
    description:    "Roman general and statesman who played a critical role in the events that led to the demise of the Roman Republic",
    years_in_power: "49-44 BC",
    achievements:   &[
      SampleAchievement {
        title:       "Crossed the Rubicon",
        description: "Made the famous decision to cross the Rubicon river, starting a civil war that led to his rise to power",
        year:        49,
      },
      SampleAchievement {
        title:       "Conquered Gaul",
        description: "Successfully conquered all of Gaul (modern-day France) in the Gallic Wars",
        year:        50,
      },
    ],
  },
  SampleDictator {
    username:       "genghis",
    name:           "Genghis Khan",
    country:        "Mongol Empire",
    description:    "Founder and first Great Khan of the Mongol Empire, which became the largest contiguous empire in history",
    years_in_power: "1206-1227",
    achievements:   &[
      SampleAchievement {
        title:       "Created the largest contiguous empire",
        description: "Built the Mongol Empire, the largest contiguous land empire in history",
        year:        1220,
      },
      SampleAchievement {
        title:       "United the Mongol tribes",
        description: "Successfully united the warring Mongol tribes under his leadership",
        year:        1206,
      },
    ],
  },
];

// ─── Seeding ─────────────────────────────────────────────────────────────────

/// Outcome of one seeding run. Totals are counted after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
  pub dictators_created:    usize,
  pub achievements_created: usize,
  pub total_dictators:      usize,
  pub total_achievements:   usize,
}

/// Load [`SAMPLE_DICTATORS`] into the store, skipping any profile whose
/// username already exists.
pub async fn seed_sample_data<S: ClubStore>(
  dictators: &DictatorService<S>,
  achievements: &AchievementService<S>,
) -> Result<SeedReport> {
  let mut dictators_created = 0;
  let mut achievements_created = 0;

  for sample in SAMPLE_DICTATORS {
    if dictators.exists_by_username(sample.username).await? {
      tracing::debug!(username = sample.username, "sample dictator exists, skipping");
      continue;
    }

    let dictator = dictators.save(sample.draft()).await?;
    dictators_created += 1;

    for ach in sample.achievements {
      achievements
        .save(AchievementDraft::new(dictator.to_ref(), ach.fields()))
        .await?;
      achievements_created += 1;
    }
  }

  let report = SeedReport {
    dictators_created,
    achievements_created,
    total_dictators: dictators.find_all().await?.len(),
    total_achievements: achievements.find_all().await?.len(),
  };
  tracing::debug!(?report, "sample data seeded");
  Ok(report)
}
