#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: &'static str,
    pub streak: u32,
    pub score: i64,
}

const BUILTIN: [LeaderboardEntry; 4] = [
    LeaderboardEntry {
        username: "71_lols",
        streak: 108,
        score: 3561,
    },
    LeaderboardEntry {
        username: "beasonhuang",
        streak: 3,
        score: 961,
    },
    LeaderboardEntry {
        username: "ypawania",
        streak: 18,
        score: 301,
    },
    LeaderboardEntry {
        username: "garyson",
        streak: 68,
        score: 181,
    },
];

/// The fixed ranking shown on the leaderboard page. There is no data source
/// behind it yet.
pub fn builtin_entries() -> &'static [LeaderboardEntry] {
    &BUILTIN
}

pub const COLUMNS: [&str; 3] = ["Username", "Streak", "Score"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_four_rows_ranked_by_score() {
        let rows = builtin_entries();
        assert_eq!(rows.len(), 4);
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(rows[0].username, "71_lols");
        assert_eq!(rows[3].streak, 68);
    }
}
