use crate::responsive::{Tier, TierFlags};

/// A snapshot of the current breakpoint, handed to every watcher.
///
/// The five membership flags are mutually exclusive. The composite flags
/// answer "at this tier or below/above it".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct BreakpointState {
    pub name: Tier,
    pub width: f64,
    pub xs: bool,
    pub xs_and_up: bool,
    pub sm: bool,
    pub sm_and_down: bool,
    pub sm_and_up: bool,
    pub md: bool,
    pub md_and_down: bool,
    pub md_and_up: bool,
    pub lg: bool,
    pub lg_and_down: bool,
    pub lg_and_up: bool,
    pub xl: bool,
    pub xl_and_down: bool,
}

impl BreakpointState {
    /// Derive a snapshot from a width and its membership flags.
    pub fn new(width: f64, flags: TierFlags) -> Self {
        let name = Tier::ALL
            .into_iter()
            .find(|tier| flags.contains(tier.flag()))
            .unwrap_or(Tier::Xs);

        Self {
            name,
            width,
            xs: flags.contains(TierFlags::XS),
            xs_and_up: flags.and_up(Tier::Xs),
            sm: flags.contains(TierFlags::SM),
            sm_and_down: flags.and_down(Tier::Sm),
            sm_and_up: flags.and_up(Tier::Sm),
            md: flags.contains(TierFlags::MD),
            md_and_down: flags.and_down(Tier::Md),
            md_and_up: flags.and_up(Tier::Md),
            lg: flags.contains(TierFlags::LG),
            lg_and_down: flags.and_down(Tier::Lg),
            lg_and_up: flags.and_up(Tier::Lg),
            xl: flags.contains(TierFlags::XL),
            xl_and_down: flags.and_down(Tier::Xl),
        }
    }

    /// The membership flags of this snapshot.
    pub fn flags(&self) -> TierFlags {
        let mut flags = TierFlags::empty();
        flags.set(TierFlags::XS, self.xs);
        flags.set(TierFlags::SM, self.sm);
        flags.set(TierFlags::MD, self.md);
        flags.set(TierFlags::LG, self.lg);
        flags.set(TierFlags::XL, self.xl);
        flags
    }

    /// Whether the current tier is one of `tiers`.
    ///
    /// ```rust
    /// use seuil::{BreakpointState, responsive::{Tier, range}};
    ///
    /// let state = BreakpointState::new(900.0, Tier::Md.flag());
    /// assert!(state.matches(range(Tier::Sm..=Tier::Lg)));
    /// assert!(!state.matches(range(Tier::Lg..)));
    /// ```
    pub fn matches(&self, tiers: TierFlags) -> bool {
        self.flags().intersects(tiers)
    }
}
