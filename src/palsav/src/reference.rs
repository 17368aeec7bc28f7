//! Generated reference tables for Palworld internal code names.
//!
//! Both tables map internal, stable code names to the display names shown
//! in structured output. The artifacts are regenerated in full from the
//! upstream PalEdit dataset by `palsav generate`; lookups that miss fall
//! back to the raw upstream value with a warning rather than failing.

pub mod pal_skills;
pub mod pal_type;

#[doc(inline)]
pub use pal_skills::PAL_SKILLS;
#[doc(inline)]
pub use pal_type::PAL_TYPES;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{span, Event, Level, Metadata, Subscriber};

    /// Counts WARN events so the miss policy's warning side is observable.
    struct WarnCounter(Arc<AtomicUsize>);

    impl Subscriber for WarnCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() == Level::WARN
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn count_warnings(resolve: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(WarnCounter(count.clone()), resolve);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_pal_type_known_code() {
        assert_eq!(pal_type::resolve("SHEEPBALL", "SheepBall"), "Lamball");
        assert_eq!(pal_type::resolve("ANUBIS", "Anubis"), "Anubis");
    }

    #[test]
    fn test_pal_type_unknown_code_passes_through() {
        assert_eq!(pal_type::resolve("XYZ_UNKNOWN", "XYZ_UNKNOWN"), "XYZ_UNKNOWN");
    }

    #[test]
    fn test_pal_type_sentinels() {
        assert_eq!(pal_type::resolve("UNKNOWN", "Unknown"), "Unknown");
        assert_eq!(pal_type::resolve("NONE", "None"), "None");
    }

    #[test]
    fn test_pal_skill_known_code() {
        assert_eq!(pal_skills::resolve("CraftSpeed_up2"), "Artisan");
        assert_eq!(pal_skills::resolve("Rare"), "Lucky");
    }

    #[test]
    fn test_pal_skill_unknown_code_passes_through() {
        assert_eq!(pal_skills::resolve("Totally_Made_Up"), "Totally_Made_Up");
    }

    #[test]
    fn test_pal_skill_is_case_sensitive() {
        // Skill codes match exactly; a case mismatch is a miss
        assert_eq!(pal_skills::resolve("craftspeed_up2"), "craftspeed_up2");
    }

    #[test]
    fn test_pal_type_miss_warns_exactly_once() {
        let warnings = count_warnings(|| {
            assert_eq!(pal_type::resolve("XYZ_UNKNOWN", "XYZ_UNKNOWN"), "XYZ_UNKNOWN");
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_pal_type_hit_does_not_warn() {
        let warnings = count_warnings(|| {
            assert_eq!(pal_type::resolve("SHEEPBALL", "SheepBall"), "Lamball");
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_pal_skill_miss_warns_exactly_once() {
        let warnings = count_warnings(|| {
            assert_eq!(pal_skills::resolve("Totally_Made_Up"), "Totally_Made_Up");
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_pal_skill_hit_does_not_warn() {
        let warnings = count_warnings(|| {
            assert_eq!(pal_skills::resolve("Rare"), "Lucky");
        });
        assert_eq!(warnings, 0);
    }
}
