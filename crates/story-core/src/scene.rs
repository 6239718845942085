// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The closed set of scene kinds and their ordinals.

/// One full-screen visual configuration in the fixed narrative sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Title card with a summary and a navigation hint.
    Intro,
    /// Choropleth of the snapshot emissions.
    Map,
    /// Aggregate trajectory over the selected year range.
    TimeSeries,
    /// Emissions per capita against GDP per capita.
    Scatter,
}

impl SceneKind {
    /// All kinds in narrative order.
    pub const ALL: [Self; 4] = [Self::Intro, Self::Map, Self::TimeSeries, Self::Scatter];

    /// Kind for a scene ordinal.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Position in the narrative sequence.
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Map => 1,
            Self::TimeSeries => 2,
            Self::Scatter => 3,
        }
    }

    /// Heading shown in the chrome.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Intro => "CO2 Emissions: A Narrative",
            Self::Map => "Scene 1: CO2 Emissions by Country (2022)",
            Self::TimeSeries => "Scene 2: Global CO2 Emissions Over Time",
            Self::Scatter => "Scene 3: CO2 vs GDP per Capita (2022)",
        }
    }

    /// Whether the scene draws per-entity marks (and so shows a selection).
    pub const fn displays_selection(self) -> bool {
        !matches!(self, Self::Intro)
    }

    /// Whether the scene filters by the year range.
    pub const fn uses_year_range(self) -> bool {
        matches!(self, Self::TimeSeries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(SceneKind::from_ordinal(kind.ordinal()), Some(kind));
        }
        assert_eq!(SceneKind::from_ordinal(4), None);
    }
}
