// ********* Classifier tables ***********

/// One entry of the institution lookup table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Institution {
    /// Substring searched for in the free-text affiliation answer (case-sensitive).
    pub pattern: &'static str,
    /// Categorical code used by the solver to track institutional quotas.
    pub code: u32,
    /// Short name used in the solver reports.
    pub short_name: &'static str,
}

/// Code returned when no institution pattern matches the answer.
pub const UNKNOWN_INSTITUTION_CODE: u32 = 999;

/// The institution table, in evaluation order. First match wins.
///
/// The order is not alphabetical and must stay as-is: "Bicocca" sits ahead
/// of "Milano" so that a Milano-Bicocca affiliation is not swallowed by the
/// broader "Milano" pattern.
pub const INSTITUTIONS: &[Institution] = &[
    Institution { pattern: "Brookhaven", code: 1, short_name: "BNL" },
    Institution { pattern: "CERN", code: 2, short_name: "CERN" },
    Institution { pattern: "CINVESTAV", code: 3, short_name: "CINVESTAV" },
    Institution { pattern: "Colorado", code: 4, short_name: "CSU" },
    Institution { pattern: "Fermi", code: 5, short_name: "FNAL" },
    Institution { pattern: "Aquila", code: 6, short_name: "INFNAquila" },
    Institution { pattern: "Assergi", code: 7, short_name: "INFNAssergi" },
    Institution { pattern: "Bicocca", code: 10, short_name: "MilanoBicocca" },
    Institution { pattern: "Milano", code: 8, short_name: "INFNMilano" },
    Institution { pattern: "Catania", code: 9, short_name: "INFNCatania" },
    Institution { pattern: "Napoli", code: 11, short_name: "INFNNapoli" },
    Institution { pattern: "Padova", code: 12, short_name: "INFNPadova" },
    Institution { pattern: "Pavia", code: 13, short_name: "INFNPavia" },
    Institution { pattern: "LNS", code: 14, short_name: "INFNLNS" },
    Institution { pattern: "SLAC", code: 15, short_name: "SLAC" },
    Institution { pattern: "Methodist", code: 16, short_name: "SMU" },
    Institution { pattern: "Tufts", code: 17, short_name: "Tufts" },
    Institution { pattern: "Bologna", code: 18, short_name: "Bologna" },
    Institution { pattern: "Genova", code: 19, short_name: "Genova" },
    Institution { pattern: "Houston", code: 20, short_name: "Houston" },
    Institution { pattern: "Pitts", code: 21, short_name: "Pittsburgh" },
    Institution { pattern: "Rochester", code: 22, short_name: "Rochester" },
    Institution { pattern: "Texas", code: 23, short_name: "UTA" },
];

/// Finds the first institution whose pattern appears in the answer.
pub fn institution(answer: &str) -> Option<&'static Institution> {
    INSTITUTIONS.iter().find(|inst| answer.contains(inst.pattern))
}

/// The institution code for an answer, falling back to
/// [UNKNOWN_INSTITUTION_CODE] when nothing matches.
pub fn institution_code(answer: &str) -> u32 {
    institution(answer)
        .map(|inst| inst.code)
        .unwrap_or(UNKNOWN_INSTITUTION_CODE)
}

// ********* Preference classifiers ***********
//
// Each classifier maps a free-text survey answer to a small closed set of
// integer codes. Unrecognized answers fall through to the default code
// without raising: the data set is small and reviewed by hand, and a typo
// in a free-text answer must not abort the whole encoding run.

/// Default: do not exceed the requested number of points.
pub const DEFAULT_EXCEED_REQUEST: u32 = 1;
/// Default: consecutive shifts are wanted.
pub const DEFAULT_CONSECUTIVE_SHIFTS: u32 = 1;
/// Default: 16 hours of rest between shifts.
pub const DEFAULT_REST: u32 = 2;
/// Default: abandon the request if the shifts cannot be consecutive.
pub const DEFAULT_STRICT_PAIRING: u32 = 2;
/// Default: non-consecutive shifts not requested.
pub const DEFAULT_NON_CONSECUTIVE_SHIFTS: u32 = 0;
/// Default: no break between non-consecutive shifts.
pub const DEFAULT_BREAK: u32 = 1;
/// Default: no unfulfilled request from a previous period.
pub const DEFAULT_PREVIOUS_REQUEST: u32 = 0;
/// Default: no special priority.
pub const DEFAULT_SPECIAL_PRIORITY: u32 = 2;

/// Willingness to exceed the point allocation. 2 when the answer contains
/// "Go" ("Go for it").
pub fn exceed_request(answer: &str) -> u32 {
    if answer.contains("Go") {
        2
    } else {
        DEFAULT_EXCEED_REQUEST
    }
}

/// Consecutive-shift preference. 2 when the answer is exactly "No".
pub fn consecutive_shifts(answer: &str) -> u32 {
    if answer == "No" {
        2
    } else {
        DEFAULT_CONSECUTIVE_SHIFTS
    }
}

/// Minimum rest between shifts. 1 when the answer mentions "8" (hours).
pub fn rest(answer: &str) -> u32 {
    if answer.contains('8') {
        1
    } else {
        DEFAULT_REST
    }
}

/// Strictness of the consecutive-shift pairing. 1 when the answer contains
/// "give" (would give up the pairing rather than the shifts).
pub fn strict_pairing(answer: &str) -> u32 {
    if answer.contains("give") {
        1
    } else {
        DEFAULT_STRICT_PAIRING
    }
}

/// Explicit request for non-consecutive shifts. 1 when the answer is
/// exactly "Yes".
pub fn non_consecutive_shifts(answer: &str) -> u32 {
    if answer == "Yes" {
        1
    } else {
        DEFAULT_NON_CONSECUTIVE_SHIFTS
    }
}

/// Requested break between non-consecutive shifts.
///
/// Checked in this order, first match wins: "3" (one shift of rest) -> 2,
/// "week" (one week) -> 3, "more" (more than a week) -> 4.
pub fn break_between(answer: &str) -> u32 {
    if answer.contains('3') {
        2
    } else if answer.contains("week") {
        3
    } else if answer.contains("more") {
        4
    } else {
        DEFAULT_BREAK
    }
}

/// Unfulfilled request from a previous period. 1 when the answer contains
/// "meet" ("did not meet my request").
pub fn previous_request(answer: &str) -> u32 {
    if answer.contains("meet") {
        1
    } else {
        DEFAULT_PREVIOUS_REQUEST
    }
}

/// Special-priority flag. 1 when the answer is exactly "Yes".
pub fn special_priority(answer: &str) -> u32 {
    if answer == "Yes" {
        1
    } else {
        DEFAULT_SPECIAL_PRIORITY
    }
}

// ********* Block selection ***********

/// Number of selectable blocks per date: (weekday, weekend) x (night, day, swing).
pub const BLOCKS_PER_DATE: usize = 6;

/// The block labels searched for in a multi-select answer, in output order.
pub const BLOCK_LABELS: [&str; BLOCKS_PER_DATE] = [
    "weekday night",
    "weekday day",
    "weekday swing",
    "weekend night",
    "weekend day",
    "weekend swing",
];

/// Parses a multi-select block answer for one date.
///
/// The answer is lower-cased and each block label is searched for
/// independently: the flags are not mutually exclusive and any subset of
/// the six blocks may be selected. Flags that are not selected must stay
/// distinguishable from an explicit 0 when serialized (the solver skips
/// empty fields but parses a literal 0), so the caller renders `false` as
/// an empty field.
pub fn select_blocks(answer: &str) -> [bool; BLOCKS_PER_DATE] {
    let lowered = answer.to_lowercase();
    let mut flags = [false; BLOCKS_PER_DATE];
    for (flag, label) in flags.iter_mut().zip(BLOCK_LABELS.iter()) {
        *flag = lowered.contains(label);
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn institution_codes() {
        for inst in INSTITUTIONS {
            let answer = format!("University of {} campus", inst.pattern);
            assert_eq!(institution_code(&answer), inst.code, "{}", inst.pattern);
        }
        assert_eq!(institution_code("University of Nowhere"), UNKNOWN_INSTITUTION_CODE);
        assert_eq!(institution_code(""), UNKNOWN_INSTITUTION_CODE);
    }

    #[test]
    fn institution_bicocca_before_milano() {
        // Both patterns occur in the full affiliation name. Bicocca must win.
        assert_eq!(institution_code("Universita degli Studi di Milano-Bicocca"), 10);
        assert_eq!(institution_code("INFN Milano"), 8);
    }

    #[test]
    fn institution_is_case_sensitive() {
        assert_eq!(institution_code("brookhaven"), UNKNOWN_INSTITUTION_CODE);
        assert_eq!(institution_code("Brookhaven National Laboratory"), 1);
    }

    #[test]
    fn institution_short_names() {
        assert_eq!(institution("SMU - Southern Methodist University").unwrap().short_name, "SMU");
        assert!(institution("unaffiliated").is_none());
    }

    #[test]
    fn exceed_request_codes() {
        assert_eq!(exceed_request("Go for it"), 2);
        assert_eq!(exceed_request("No thanks"), DEFAULT_EXCEED_REQUEST);
        assert_eq!(exceed_request(""), 1);
    }

    #[test]
    fn consecutive_shifts_codes() {
        assert_eq!(consecutive_shifts("No"), 2);
        // Equality, not substring.
        assert_eq!(consecutive_shifts("No way"), DEFAULT_CONSECUTIVE_SHIFTS);
        assert_eq!(consecutive_shifts("Yes"), 1);
    }

    #[test]
    fn rest_codes() {
        assert_eq!(rest("8 hours"), 1);
        assert_eq!(rest("16 hours"), DEFAULT_REST);
        assert_eq!(rest(""), 2);
    }

    #[test]
    fn strict_pairing_codes() {
        assert_eq!(strict_pairing("I would give up the pairing"), 1);
        assert_eq!(strict_pairing("Abandon the request"), DEFAULT_STRICT_PAIRING);
    }

    #[test]
    fn non_consecutive_shifts_codes() {
        assert_eq!(non_consecutive_shifts("Yes"), 1);
        assert_eq!(non_consecutive_shifts("Yes please"), DEFAULT_NON_CONSECUTIVE_SHIFTS);
        assert_eq!(non_consecutive_shifts("No"), 0);
    }

    #[test]
    fn break_between_codes() {
        assert_eq!(break_between("3 shifts of rest"), 2);
        assert_eq!(break_between("one week"), 3);
        assert_eq!(break_between("more rest"), 4);
        assert_eq!(break_between("no preference"), DEFAULT_BREAK);
    }

    #[test]
    fn break_between_first_match_wins() {
        // "3" is checked before "week".
        assert_eq!(break_between("3 shifts or a week"), 2);
        // "week" is checked before "more".
        assert_eq!(break_between("a week or more"), 3);
    }

    #[test]
    fn previous_request_codes() {
        assert_eq!(previous_request("My request was not meet"), 1);
        assert_eq!(previous_request("First time"), DEFAULT_PREVIOUS_REQUEST);
    }

    #[test]
    fn special_priority_codes() {
        assert_eq!(special_priority("Yes"), 1);
        assert_eq!(special_priority("No"), DEFAULT_SPECIAL_PRIORITY);
        assert_eq!(special_priority("yes"), 2);
    }

    #[test]
    fn select_blocks_subsets() {
        assert_eq!(
            select_blocks("Weekday Night, Weekend Swing"),
            [true, false, false, false, false, true]
        );
        assert_eq!(select_blocks(""), [false; 6]);
        assert_eq!(
            select_blocks(
                "weekday night, weekday day, weekday swing, weekend night, weekend day, weekend swing"
            ),
            [true; 6]
        );
    }

    #[test]
    fn select_blocks_is_order_independent() {
        let a = select_blocks("Weekend Swing, Weekday Night");
        let b = select_blocks("Weekday Night, Weekend Swing");
        assert_eq!(a, b);
    }

    #[test]
    fn select_blocks_ignores_case() {
        assert_eq!(select_blocks("WEEKEND DAY"), [false, false, false, false, true, false]);
    }
}
