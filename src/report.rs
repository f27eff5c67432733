//! Multi-facet report assembly.
//!
//! Replaces a chained builder with an immutable request object: callers
//! describe every facet they want up front and receive the whole result in
//! one call, so there is never a partially-populated intermediate state.

use serde::Serialize;

use crate::consts::MAX_MONTH;
use crate::info::{DateInfo, date_info, previous_month_info};
use crate::range::{DateRange, RangeError, custom_range, last_n_days, last_n_months};
use crate::tables::{CalendarMonth, months_for_year};
use crate::Date;

/// Which calendar facets to compute, all keyed off one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportRequest {
    /// Fact sheet for the reference date's month
    pub current:       bool,
    /// Fact sheet for the month before it
    pub previous:      bool,
    /// Trailing window of N days ending at the reference
    pub last_n_days:   Option<u32>,
    /// Trailing window of N months ending at the reference
    pub last_n_months: Option<u32>,
    /// Explicit inclusive span
    pub custom_range:  Option<(Date, Date)>,
    /// Month table for the reference date's year
    pub months:        bool,
}

/// Result of [`build_report`]; only requested facets are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub current:       Option<DateInfo>,
    pub previous:      Option<DateInfo>,
    pub last_n_days:   Option<DateRange>,
    pub last_n_months: Option<DateRange>,
    pub custom_range:  Option<DateRange>,
    pub months:        Option<[CalendarMonth; MAX_MONTH as usize]>,
}

/// Computes every facet the request asks for, all derived from the same
/// reference date.
///
/// All-or-nothing: the first facet that fails aborts the whole report and
/// nothing partial is returned.
///
/// # Errors
/// Propagates the underlying `RangeError` of whichever facet fails.
pub fn build_report(request: &ReportRequest, reference: Date) -> Result<Report, RangeError> {
    let current = request.current.then(|| date_info(reference));
    let previous = if request.previous {
        Some(previous_month_info(reference)?)
    } else {
        None
    };
    let last_days = match request.last_n_days {
        Some(days) => Some(last_n_days(days, reference, None)?),
        None => None,
    };
    let last_months = match request.last_n_months {
        Some(months) => Some(last_n_months(months, reference, None)?),
        None => None,
    };
    let custom = match request.custom_range {
        Some((start, end)) => Some(custom_range(start, end, None)?),
        None => None,
    };
    let months = request.months.then(|| months_for_year(reference.year()));

    Ok(Report {
        current,
        previous,
        last_n_days: last_days,
        last_n_months: last_months,
        custom_range: custom,
        months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::d;

    #[test]
    fn test_empty_request_yields_empty_report() {
        let report = build_report(&ReportRequest::default(), d(2024, 3, 15)).unwrap();
        assert!(report.current.is_none());
        assert!(report.previous.is_none());
        assert!(report.last_n_days.is_none());
        assert!(report.last_n_months.is_none());
        assert!(report.custom_range.is_none());
        assert!(report.months.is_none());
    }

    #[test]
    fn test_requested_facets_are_populated() {
        let request = ReportRequest {
            current: true,
            previous: true,
            last_n_days: Some(7),
            last_n_months: Some(3),
            custom_range: Some((d(2024, 1, 1), d(2024, 1, 31))),
            months: true,
        };
        let report = build_report(&request, d(2024, 3, 15)).unwrap();

        let current = report.current.unwrap();
        assert_eq!(current.month_name, "March");
        let previous = report.previous.unwrap();
        assert_eq!(previous.month_name, "February");

        let week = report.last_n_days.unwrap();
        assert_eq!(week.labels().len(), 7);
        assert_eq!(week.end_date(), d(2024, 3, 15));

        let quarter = report.last_n_months.unwrap();
        assert_eq!(quarter.start_date(), d(2024, 1, 15));

        let january = report.custom_range.unwrap();
        assert_eq!(january.labels().len(), 31);

        let months = report.months.unwrap();
        assert_eq!(months[1].days, 29);
    }

    #[test]
    fn test_all_facets_share_one_reference() {
        let request = ReportRequest {
            current: true,
            last_n_days: Some(30),
            ..ReportRequest::default()
        };
        // Near a month boundary the facets must still agree
        let report = build_report(&request, d(2024, 2, 29)).unwrap();
        assert_eq!(report.current.unwrap().month, "02");
        assert_eq!(report.last_n_days.unwrap().end_date(), d(2024, 2, 29));
    }

    #[test]
    fn test_failure_aborts_whole_report() {
        let request = ReportRequest {
            current: true,
            custom_range: Some((d(2024, 3, 15), d(2024, 3, 1))),
            ..ReportRequest::default()
        };
        let result = build_report(&request, d(2024, 3, 15));
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_zero_window_propagates() {
        let request = ReportRequest {
            last_n_days: Some(0),
            ..ReportRequest::default()
        };
        let result = build_report(&request, d(2024, 3, 15));
        assert!(matches!(result, Err(RangeError::ZeroSpan { .. })));
    }
}
