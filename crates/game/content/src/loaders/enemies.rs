//! Enemy catalog loader.

use std::path::Path;

use combat_core::EnemyTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy catalog from a RON file.
    ///
    /// RON format: `Vec<(String, EnemyTemplate)>`. Every template is checked
    /// against the construction invariants (parts present, exactly one core).
    pub fn load(path: &Path) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let content = read_file(path)?;
        let enemies: Vec<(String, EnemyTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for (enemy_id, template) in &enemies {
            template
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid enemy '{}': {}", enemy_id, e))?;
        }

        tracing::debug!(enemies = enemies.len(), "loaded enemy catalog");
        Ok(enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::IntentKind;
    use std::io::Write;

    fn load(body: &str) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        EnemyLoader::load(file.path())
    }

    #[test]
    fn parses_parts_and_intents() {
        let enemies = load(
            r#"[
                ("bat", (
                    name: "Bat",
                    parts: [
                        (name: "Body", max_health: 8, is_core: true),
                        (name: "Wing", max_health: 4, intents: [
                            (kind: Attack, magnitude: 2, description: "Bite for 2"),
                            (kind: Debuff, magnitude: 1, description: "Screech"),
                        ]),
                    ],
                )),
            ]"#,
        )
        .unwrap();

        let (id, bat) = &enemies[0];
        assert_eq!(id, "bat");
        assert!(bat.parts[0].is_core);
        assert!(!bat.parts[1].is_core);
        assert_eq!(bat.parts[1].intents[1].kind, IntentKind::Debuff);
    }

    #[test]
    fn enemy_without_core_is_rejected() {
        let err = load(
            r#"[("ghost", (name: "Ghost", parts: [(name: "Veil", max_health: 5)]))]"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("ghost"));
    }
}
