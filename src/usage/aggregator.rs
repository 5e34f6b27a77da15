use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{PlayerPerformance, RosterSnapshot};
use crate::usage::classifier::UsageBucket;
use crate::usage::stats::{BattingLine, PitchingLine};

/// The league-wide span of ingested snapshot dates for a season. Days
/// outside this window never count against `not_rostered`.
#[derive(Debug, Clone, Copy)]
pub struct Coverage {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Coverage {
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct BucketTotal {
    pub days: i64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    pub started: BucketTotal,
    pub benched: BucketTotal,
    pub injured_list: BucketTotal,
    pub minor_leagues: BucketTotal,
    pub other_roster: BucketTotal,
    pub not_rostered: BucketTotal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDays {
    pub team_id: String,
    pub team_name: String,
    pub days: i64,
}

/// A contiguous run of snapshot days under one fantasy team.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStint {
    pub team_id: String,
    pub team_name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUsage {
    /// "YYYY-MM"
    pub month: String,
    /// Calendar days in the month.
    pub total_days: i64,
    /// Days inside the coverage window and not in the future.
    pub covered_days: i64,
    pub started: i64,
    pub benched: i64,
    pub injured_list: i64,
    pub minor_leagues: i64,
    pub other_roster: i64,
    pub not_rostered: i64,
    pub future_days: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_teams: Vec<TeamDays>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// Surfaced by the spotlight response at top level, not re-serialized
    /// inside the usage block.
    #[serde(skip)]
    pub current_team_id: String,
    #[serde(skip)]
    pub current_team_name: String,
    #[serde(skip)]
    pub team_history: Vec<TeamStint>,
    /// Covered, non-future season days across all listed months.
    pub season_days: i64,
    pub totals: SeasonTotals,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_teams: Vec<TeamDays>,
    pub months: Vec<MonthlyUsage>,
}

/// Usage report plus the per-day bucket map the performance join needs.
#[derive(Debug, Clone)]
pub struct UsageAnalysis {
    pub report: UsageReport,
    pub day_buckets: BTreeMap<NaiveDate, UsageBucket>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the season usage analysis for one player from his snapshot rows.
/// Returns None when the player has no rows at all (the caller surfaces
/// that as not-found). `today` separates future days from unrostered days.
pub fn analyze(
    rows: &[RosterSnapshot],
    coverage: Coverage,
    today: NaiveDate,
) -> Option<UsageAnalysis> {
    if rows.is_empty() {
        return None;
    }

    let mut sorted: Vec<&RosterSnapshot> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        (a.date, a.fantasy_team_id.as_str()).cmp(&(b.date, b.fantasy_team_id.as_str()))
    });

    // Current team = team on the chronologically latest row; a same-day tie
    // resolves to the larger team id via the sort above.
    let last = *sorted.last()?;
    let current_team_id = last.fantasy_team_id.clone();
    let current_team_name = last.fantasy_team_name.clone();

    // One row per date. Duplicate days (invariant violation upstream) pick
    // the current-team row when present, else the smallest team id.
    let mut day_rows: BTreeMap<NaiveDate, &RosterSnapshot> = BTreeMap::new();
    for &row in &sorted {
        match day_rows.get(&row.date) {
            None => {
                day_rows.insert(row.date, row);
            }
            Some(existing) => {
                if existing.fantasy_team_id != current_team_id
                    && row.fantasy_team_id == current_team_id
                {
                    day_rows.insert(row.date, row);
                }
            }
        }
    }

    let mut day_buckets: BTreeMap<NaiveDate, UsageBucket> = BTreeMap::new();
    let mut day_teams: BTreeMap<NaiveDate, (&str, &str)> = BTreeMap::new();
    for (date, row) in &day_rows {
        let bucket = UsageBucket::classify(
            &row.selected_position,
            row.fantasy_team_id == current_team_id,
        );
        day_buckets.insert(*date, bucket);
        day_teams.insert(
            *date,
            (row.fantasy_team_id.as_str(), row.fantasy_team_name.as_str()),
        );
    }

    let team_history = build_team_history(&day_rows);

    // Walk every calendar day of every month the coverage window touches.
    let mut months = Vec::new();
    let mut season = BucketCounts::default();
    let mut season_days = 0i64;
    let mut season_other: BTreeMap<(String, String), i64> = BTreeMap::new();

    let mut cursor = month_start(coverage.start);
    let final_month = month_start(coverage.end);
    while cursor <= final_month {
        let total_days = days_in_month(cursor);
        let mut counts = BucketCounts::default();
        let mut covered_days = 0i64;
        let mut future_days = 0i64;
        let mut other: BTreeMap<(String, String), i64> = BTreeMap::new();

        for dom in 1..=total_days {
            let day = cursor.with_day(dom as u32).unwrap_or(cursor);
            if day > today {
                future_days += 1;
                continue;
            }
            if !coverage.contains(day) {
                // Before collection began or after it stopped; not charged
                // to any bucket.
                continue;
            }
            covered_days += 1;
            let bucket = day_buckets
                .get(&day)
                .copied()
                .unwrap_or(UsageBucket::NotRostered);
            counts.add(bucket);
            if bucket == UsageBucket::OtherRoster {
                if let Some((id, name)) = day_teams.get(&day) {
                    *other.entry((id.to_string(), name.to_string())).or_insert(0) += 1;
                }
            }
        }

        season.merge(&counts);
        season_days += covered_days;
        for (team, days) in &other {
            *season_other.entry(team.clone()).or_insert(0) += days;
        }

        months.push(MonthlyUsage {
            month: format!("{:04}-{:02}", cursor.year(), cursor.month()),
            total_days,
            covered_days,
            started: counts.started,
            benched: counts.benched,
            injured_list: counts.injured_list,
            minor_leagues: counts.minor_leagues,
            other_roster: counts.other_roster,
            not_rostered: counts.not_rostered,
            future_days,
            other_teams: team_days_vec(other),
        });

        cursor = next_month(cursor);
    }

    let report = UsageReport {
        current_team_id,
        current_team_name,
        team_history,
        season_days,
        totals: season.into_totals(season_days),
        other_teams: team_days_vec(season_other),
        months,
    };

    Some(UsageAnalysis {
        report,
        day_buckets,
    })
}

/// Per-bucket performance aggregate for the breakdown endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPerformance {
    pub bucket: UsageBucket,
    pub days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting: Option<BattingLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitching: Option<PitchingLine>,
}

/// Attribute each performance row to the usage bucket its date fell in and
/// sum the counts. Rows on covered days with no snapshot go to
/// `not_rostered`; rows outside the coverage window are dropped.
pub fn bucket_performance(
    analysis: &UsageAnalysis,
    coverage: Coverage,
    today: NaiveDate,
    performance: &[PlayerPerformance],
) -> Vec<BucketPerformance> {
    let mut batting: BTreeMap<UsageBucket, BattingLine> = BTreeMap::new();
    let mut pitching: BTreeMap<UsageBucket, PitchingLine> = BTreeMap::new();

    for row in performance {
        if row.date > today || !coverage.contains(row.date) {
            continue;
        }
        let bucket = analysis
            .day_buckets
            .get(&row.date)
            .copied()
            .unwrap_or(UsageBucket::NotRostered);
        if row.batted() || row.at_bats > 0 || row.hits > 0 {
            batting.entry(bucket).or_default().add_day(row);
        }
        if row.pitched() {
            pitching.entry(bucket).or_default().add_day(row);
        }
    }

    let totals = &analysis.report.totals;
    let ordered = [
        (UsageBucket::Started, totals.started.days),
        (UsageBucket::Benched, totals.benched.days),
        (UsageBucket::InjuredList, totals.injured_list.days),
        (UsageBucket::MinorLeagues, totals.minor_leagues.days),
        (UsageBucket::OtherRoster, totals.other_roster.days),
        (UsageBucket::NotRostered, totals.not_rostered.days),
    ];

    let mut out = Vec::new();
    for (bucket, days) in ordered {
        let mut bat = batting.remove(&bucket);
        let mut pit = pitching.remove(&bucket);
        if let Some(line) = bat.as_mut() {
            line.finalize();
        }
        if let Some(line) = pit.as_mut() {
            line.finalize();
        }
        let bat = bat.filter(|l| !l.is_empty());
        let pit = pit.filter(|l| !l.is_empty());
        if days == 0 && bat.is_none() && pit.is_none() {
            continue;
        }
        out.push(BucketPerformance {
            bucket,
            days,
            batting: bat,
            pitching: pit,
        });
    }
    out
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

#[derive(Default)]
struct BucketCounts {
    started: i64,
    benched: i64,
    injured_list: i64,
    minor_leagues: i64,
    other_roster: i64,
    not_rostered: i64,
}

impl BucketCounts {
    fn add(&mut self, bucket: UsageBucket) {
        match bucket {
            UsageBucket::Started => self.started += 1,
            UsageBucket::Benched => self.benched += 1,
            UsageBucket::InjuredList => self.injured_list += 1,
            UsageBucket::MinorLeagues => self.minor_leagues += 1,
            UsageBucket::OtherRoster => self.other_roster += 1,
            UsageBucket::NotRostered => self.not_rostered += 1,
        }
    }

    fn merge(&mut self, other: &BucketCounts) {
        self.started += other.started;
        self.benched += other.benched;
        self.injured_list += other.injured_list;
        self.minor_leagues += other.minor_leagues;
        self.other_roster += other.other_roster;
        self.not_rostered += other.not_rostered;
    }

    fn into_totals(self, season_days: i64) -> SeasonTotals {
        let total = |days: i64| BucketTotal {
            days,
            percent: percent_of(days, season_days),
        };
        SeasonTotals {
            started: total(self.started),
            benched: total(self.benched),
            injured_list: total(self.injured_list),
            minor_leagues: total(self.minor_leagues),
            other_roster: total(self.other_roster),
            not_rostered: total(self.not_rostered),
        }
    }
}

fn percent_of(days: i64, season_days: i64) -> f64 {
    if season_days == 0 {
        return 0.0;
    }
    let pct = days as f64 * 100.0 / season_days as f64;
    (pct * 10.0).round() / 10.0
}

fn build_team_history(day_rows: &BTreeMap<NaiveDate, &RosterSnapshot>) -> Vec<TeamStint> {
    let mut stints: Vec<TeamStint> = Vec::new();
    for (date, row) in day_rows {
        match stints.last_mut() {
            Some(stint) if stint.team_id == row.fantasy_team_id => {
                stint.to = *date;
                stint.days += 1;
            }
            _ => stints.push(TeamStint {
                team_id: row.fantasy_team_id.clone(),
                team_name: row.fantasy_team_name.clone(),
                from: *date,
                to: *date,
                days: 1,
            }),
        }
    }
    stints
}

fn team_days_vec(map: BTreeMap<(String, String), i64>) -> Vec<TeamDays> {
    let mut teams: Vec<TeamDays> = map
        .into_iter()
        .map(|((team_id, team_name), days)| TeamDays {
            team_id,
            team_name,
            days,
        })
        .collect();
    teams.sort_by(|a, b| b.days.cmp(&a.days).then(a.team_id.cmp(&b.team_id)));
    teams
}

fn month_start(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
}

fn next_month(month: NaiveDate) -> NaiveDate {
    if month.month() == 12 {
        NaiveDate::from_ymd_opt(month.year() + 1, 1, 1).unwrap_or(month)
    } else {
        NaiveDate::from_ymd_opt(month.year(), month.month() + 1, 1).unwrap_or(month)
    }
}

fn days_in_month(month: NaiveDate) -> i64 {
    let first = month_start(month);
    (next_month(first) - first).num_days()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
