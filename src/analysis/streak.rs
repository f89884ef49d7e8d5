use chrono::NaiveDate;

/// Both streak functions operate on the distinct set of calendar dates that
/// have at least one session, sorted descending.

/// Consecutive days with sessions, counted backward from today. A most recent
/// session further back than yesterday means the streak is broken. The
/// expected-date counter starts at yesterday, so a streak whose latest
/// session was yesterday stops at 1 even when earlier days line up.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&latest) = dates.first() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut expected = previous_day(today);
    for &date in &dates[1..] {
        if date != expected {
            break;
        }
        streak += 1;
        expected = previous_day(expected);
    }
    streak
}

/// Longest run of consecutive days anywhere in history. The current streak is
/// folded in, it may itself be the longest run while still active.
pub fn longest_streak(dates: &[NaiveDate], current: u32) -> u32 {
    if dates.is_empty() {
        return current;
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        run = if (pair[0] - pair[1]).num_days() == 1 {
            run + 1
        } else {
            1
        };
        longest = longest.max(run);
    }
    longest.max(current)
}

fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("Beginning of time should never happen")
}
