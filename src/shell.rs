// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Division {
    pub label: &'static str,
    pub route: &'static str,
    pub focus: &'static str,
}

pub const DIVISIONS: [Division; 7] = [
    Division {
        label: "Gold Digger Command",
        route: "finance",
        focus: "accounts, goals, ledger, payment calendar",
    },
    Division {
        label: "Casino Royale Division",
        route: "trading",
        focus: "trading",
    },
    Division {
        label: "Clipboard Warriors HQ",
        route: "admin",
        focus: "admin",
    },
    Division {
        label: "Time Lords Operations",
        route: "scheduling",
        focus: "scheduling",
    },
    Division {
        label: "Mouthpiece Command",
        route: "comms",
        focus: "comms",
    },
    Division {
        label: "Meat Wagon Ops",
        route: "wellness",
        focus: "fitness, nutrition, mental resilience",
    },
    Division {
        label: "Skunkworks Shenanigans",
        route: "rnd",
        focus: "R&D",
    },
];

/// Look a division up by route, ignoring a leading `/` and case.
pub fn find(route: &str) -> Option<&'static Division> {
    let wanted = route.trim_start_matches('/');
    DIVISIONS
        .iter()
        .find(|d| d.route.eq_ignore_ascii_case(wanted))
}
