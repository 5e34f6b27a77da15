use serde::Serialize;

use crate::models::PlayerPerformance;

/// Summed batting counts for one usage bucket, with derived rates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub games: i64,
    pub at_bats: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub runs: i64,
    pub rbis: i64,
    pub stolen_bases: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub hit_by_pitch: i64,
    pub sacrifice_flies: i64,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
}

/// Summed pitching counts for one usage bucket, with derived rates.
/// `outs` carries the innings sum exactly; `innings_pitched` is the
/// box-score rendering of it (thirds as .1/.2).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingLine {
    pub appearances: i64,
    pub outs: i64,
    pub innings_pitched: f64,
    pub earned_runs: i64,
    pub hits_allowed: i64,
    pub walks_allowed: i64,
    pub strikeouts: i64,
    pub era: f64,
    pub whip: f64,
    pub k_bb: f64,
}

// ---------------------------------------------------------------------------
// Rate formulas — 0 on a zero denominator, never NaN
// ---------------------------------------------------------------------------

pub fn batting_average(hits: i64, at_bats: i64) -> f64 {
    ratio(hits as f64, at_bats as f64)
}

pub fn on_base_percentage(
    hits: i64,
    walks: i64,
    hit_by_pitch: i64,
    at_bats: i64,
    sacrifice_flies: i64,
) -> f64 {
    let reached = (hits + walks + hit_by_pitch) as f64;
    let chances = (at_bats + walks + hit_by_pitch + sacrifice_flies) as f64;
    ratio(reached, chances)
}

pub fn slugging(total_bases: i64, at_bats: i64) -> f64 {
    ratio(total_bases as f64, at_bats as f64)
}

/// TB = 1B + 2·2B + 3·3B + 4·HR, with singles implied by hits.
pub fn total_bases(hits: i64, doubles: i64, triples: i64, home_runs: i64) -> i64 {
    hits + doubles + 2 * triples + 3 * home_runs
}

pub fn earned_run_average(earned_runs: i64, innings: f64) -> f64 {
    if innings <= 0.0 {
        return 0.0;
    }
    earned_runs as f64 * 9.0 / innings
}

pub fn whip(hits_allowed: i64, walks_allowed: i64, innings: f64) -> f64 {
    if innings <= 0.0 {
        return 0.0;
    }
    (hits_allowed + walks_allowed) as f64 / innings
}

/// K/BB; falls back to raw strikeouts when the pitcher walked nobody.
pub fn strikeout_walk_ratio(strikeouts: i64, walks: i64) -> f64 {
    if walks == 0 {
        strikeouts as f64
    } else {
        strikeouts as f64 / walks as f64
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den <= 0.0 {
        0.0
    } else {
        num / den
    }
}

// ---------------------------------------------------------------------------
// Innings arithmetic — box-score notation sums in thirds
// ---------------------------------------------------------------------------

/// Convert "6.1"-style innings to outs (6.1 → 19). Tenths digits other
/// than 0/1/2 are clamped to 2; they do not occur in well-formed feeds.
pub fn innings_to_outs(innings_pitched: f64) -> i64 {
    let whole = innings_pitched.trunc() as i64;
    let tenths = ((innings_pitched - innings_pitched.trunc()) * 10.0).round() as i64;
    whole * 3 + tenths.min(2)
}

/// Outs back to box-score notation (19 → 6.1).
pub fn outs_to_innings(outs: i64) -> f64 {
    (outs / 3) as f64 + (outs % 3) as f64 / 10.0
}

/// True innings value for rate math (19 outs → 6.333…).
pub fn outs_to_innings_value(outs: i64) -> f64 {
    outs as f64 / 3.0
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

impl BattingLine {
    pub fn add_day(&mut self, p: &PlayerPerformance) {
        if p.batted() {
            self.games += 1;
        }
        self.at_bats += p.at_bats;
        self.hits += p.hits;
        self.doubles += p.doubles;
        self.triples += p.triples;
        self.home_runs += p.home_runs;
        self.runs += p.runs;
        self.rbis += p.rbis;
        self.stolen_bases += p.stolen_bases;
        self.walks += p.walks;
        self.strikeouts += p.strikeouts;
        self.hit_by_pitch += p.hit_by_pitch;
        self.sacrifice_flies += p.sacrifice_flies;
    }

    pub fn finalize(&mut self) {
        self.avg = batting_average(self.hits, self.at_bats);
        self.obp = on_base_percentage(
            self.hits,
            self.walks,
            self.hit_by_pitch,
            self.at_bats,
            self.sacrifice_flies,
        );
        let tb = total_bases(self.hits, self.doubles, self.triples, self.home_runs);
        self.slg = slugging(tb, self.at_bats);
        self.ops = self.obp + self.slg;
    }

    pub fn is_empty(&self) -> bool {
        self.games == 0 && self.at_bats == 0
    }
}

impl PitchingLine {
    pub fn add_day(&mut self, p: &PlayerPerformance) {
        if p.pitched() {
            self.appearances += 1;
        }
        self.outs += innings_to_outs(p.innings_pitched);
        self.earned_runs += p.earned_runs;
        self.hits_allowed += p.hits_allowed;
        self.walks_allowed += p.walks_allowed;
        self.strikeouts += p.strikeouts_thrown;
    }

    pub fn finalize(&mut self) {
        self.innings_pitched = outs_to_innings(self.outs);
        let innings = outs_to_innings_value(self.outs);
        self.era = earned_run_average(self.earned_runs, innings);
        self.whip = whip(self.hits_allowed, self.walks_allowed, innings);
        self.k_bb = strikeout_walk_ratio(self.strikeouts, self.walks_allowed);
    }

    pub fn is_empty(&self) -> bool {
        self.appearances == 0 && self.outs == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_average_basic() {
        // 30 for 100 = .300
        assert!((batting_average(30, 100) - 0.300).abs() < 1e-9);
    }

    #[test]
    fn test_rates_zero_denominator() {
        assert_eq!(batting_average(0, 0), 0.0);
        assert_eq!(on_base_percentage(0, 0, 0, 0, 0), 0.0);
        assert_eq!(slugging(0, 0), 0.0);
        assert_eq!(earned_run_average(5, 0.0), 0.0);
        assert_eq!(whip(3, 2, 0.0), 0.0);
    }

    #[test]
    fn test_obp_formula() {
        // (30 + 10 + 2) / (100 + 10 + 2 + 3) = 42 / 115
        let obp = on_base_percentage(30, 10, 2, 100, 3);
        assert!((obp - 42.0 / 115.0).abs() < 1e-9);
        assert!(obp > 0.0 && obp < 1.0);
    }

    #[test]
    fn test_total_bases() {
        // 10 hits of which 2 doubles, 1 triple, 3 HR → 4 singles
        // TB = 4 + 2*2 + 1*3 + 3*4 = 23 = hits + 2B + 2*3B + 3*HR
        assert_eq!(total_bases(10, 2, 1, 3), 23);
    }

    #[test]
    fn test_era_nine_inning_scale() {
        // 3 ER over 9 IP = 3.00
        assert!((earned_run_average(3, 9.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_k_bb_zero_walks_falls_back_to_strikeouts() {
        assert_eq!(strikeout_walk_ratio(7, 0), 7.0);
        assert!((strikeout_walk_ratio(9, 3) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_innings_thirds_roundtrip() {
        assert_eq!(innings_to_outs(6.1), 19);
        assert_eq!(innings_to_outs(0.2), 2);
        assert_eq!(innings_to_outs(7.0), 21);
        assert!((outs_to_innings(19) - 6.1).abs() < 1e-9);
    }

    #[test]
    fn test_innings_sum_carries_thirds() {
        // 5.2 + 3.2 = 9.1 innings, not 8.4
        let outs = innings_to_outs(5.2) + innings_to_outs(3.2);
        assert_eq!(outs, 28);
        assert!((outs_to_innings(outs) - 9.1).abs() < 1e-9);
    }

    #[test]
    fn test_pitching_line_finalize() {
        let mut line = PitchingLine::default();
        let mut day = PlayerPerformance {
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            player_name: "Test Pitcher".into(),
            at_bats: 0,
            hits: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            runs: 0,
            rbis: 0,
            stolen_bases: 0,
            walks: 0,
            strikeouts: 0,
            hit_by_pitch: 0,
            sacrifice_flies: 0,
            innings_pitched: 6.0,
            earned_runs: 2,
            hits_allowed: 5,
            walks_allowed: 1,
            strikeouts_thrown: 8,
        };
        line.add_day(&day);
        day.innings_pitched = 3.0;
        day.earned_runs = 1;
        line.add_day(&day);
        line.finalize();

        assert_eq!(line.appearances, 2);
        assert!((line.innings_pitched - 9.0).abs() < 1e-9);
        assert!((line.era - 3.0).abs() < 1e-9);
        assert!((line.whip - 12.0 / 9.0).abs() < 1e-9);
        assert!((line.k_bb - 8.0).abs() < 1e-9);
    }
}
