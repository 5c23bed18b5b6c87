use serde::Deserialize;

const STATIC_LEAGUE_JSON: &str = include_str!("../../data/league.json");

/// Seed data bundled into the binary: default team names, colours,
/// conferences and the name pools players are generated from.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseEntity {
    pub league_name: String,
    pub team_names: Vec<String>,
    pub team_colors: Vec<String>,
    pub conferences: Vec<String>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        serde_json::from_str(STATIC_LEAGUE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_loads() {
        let data = DatabaseLoader::load().unwrap();

        assert_eq!(data.team_names.len(), 20);
        assert_eq!(data.team_colors.len(), 10);
        assert_eq!(data.team_names[0], "Ravens");
        assert!(!data.first_names.is_empty());
    }
}
