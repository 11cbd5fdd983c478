use memory::{Memory, MemoryError, UserPreferences};
use serde_json::Value;

use crate::types::ParsedRequest;

/// Apply `parsed` to a copy of the current preferences.
///
/// Nothing in `memory` changes; the caller commits the returned preferences
/// once it is happy with them. The snapshot describes the staged state.
pub fn stage_update(
    memory: &Memory,
    parsed: &ParsedRequest,
) -> Result<(UserPreferences, Value), MemoryError> {
    let mut staged = memory.preferences().clone();
    if let Some(niche) = &parsed.niche {
        staged.last_niches.push(niche.clone());
    }
    if let Some(tone) = &parsed.tone {
        staged.frequent_tones.push(tone.clone());
    }
    let snapshot = memory.snapshot_of(&staged)?;
    Ok((staged, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(niche: Option<&str>, tone: Option<&str>) -> ParsedRequest {
        ParsedRequest {
            niche: niche.map(Into::into),
            tone: tone.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn stages_without_touching_memory() {
        let memory = Memory::new();
        let (staged, snapshot) = stage_update(&memory, &parsed(Some("food"), Some("humorous"))).unwrap();
        assert!(memory.preferences().last_niches.is_empty());
        assert_eq!(staged.last_niches.to_vec(), vec!["food"]);
        assert_eq!(staged.frequent_tones.to_vec(), vec!["humorous"]);
        assert_eq!(snapshot["user_preferences"]["last_niches"], json!(["food"]));
    }

    #[test]
    fn missing_tone_leaves_tones_alone() {
        let mut memory = Memory::new();
        let (first, _) = stage_update(&memory, &parsed(Some("tech"), Some("serious"))).unwrap();
        memory.commit(first);
        let (second, _) = stage_update(&memory, &parsed(Some("travel"), None)).unwrap();
        assert_eq!(second.frequent_tones.to_vec(), vec!["serious"]);
        assert_eq!(second.last_niches.to_vec(), vec!["travel", "tech"]);
    }

    #[test]
    fn six_niches_keep_newest_five() {
        let mut memory = Memory::new();
        for niche in ["food", "tech", "art", "space", "law", "music"] {
            let (staged, _) = stage_update(&memory, &parsed(Some(niche), None)).unwrap();
            memory.commit(staged);
        }
        assert_eq!(
            memory.preferences().last_niches.to_vec(),
            vec!["music", "law", "space", "art", "tech"]
        );
    }
}
