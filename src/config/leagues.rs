// src/config/leagues.rs
//
// The fixed competition table. Ids are fbref's opaque competition ids and are
// only ever used to build URLs.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Competition {
    pub name: &'static str,
    pub id: &'static str,
}

pub static LEAGUES: &[Competition] = &[
    Competition { name: "Premier League", id: "9" },
    Competition { name: "La Liga", id: "12" },
    Competition { name: "Bundesliga", id: "20" },
    Competition { name: "Serie A", id: "11" },
    Competition { name: "Ligue 1", id: "13" },
];

pub fn all() -> &'static [Competition] {
    LEAGUES
}

/// Case-insensitive lookup by display name.
pub fn find(name: &str) -> Option<&'static Competition> {
    let name = name.trim();
    LEAGUES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn default_league() -> &'static Competition {
    &LEAGUES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("premier league").map(|c| c.id), Some("9"));
        assert_eq!(find(" Ligue 1 ").map(|c| c.id), Some("13"));
        assert!(find("Eredivisie").is_none());
    }

    #[test]
    fn five_leagues_with_unique_ids() {
        let mut ids: Vec<&str> = all().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
