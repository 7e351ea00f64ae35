//! Staffing backfill.
//!
//! After the preference rounds, every slot still below the minimum is topped
//! up with whoever is free that day and under the weekly cap, chosen in
//! random order. Backfill ignores the preferred-shift cap.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{AssignmentSource, Day, EmployeePreferences, ShiftType};

use super::ledger::AssignmentLedger;

/// Tops up each `(day, shift)` to `minimum`, Monday first and in shift
/// declaration order. Slots stay short when no one is available.
pub(crate) fn backfill<'a, R: Rng + ?Sized>(
    employees: &[&'a EmployeePreferences],
    ledger: &mut AssignmentLedger<'a>,
    minimum: usize,
    rng: &mut R,
) {
    for day in Day::ALL {
        for shift in ShiftType::ALL {
            let need = minimum.saturating_sub(ledger.count(day, shift));
            if need == 0 {
                continue;
            }

            let mut candidates: Vec<&'a str> = employees
                .iter()
                .copied()
                .map(|e| e.name.as_str())
                .filter(|name| ledger.can_assign(name, day))
                .collect();
            candidates.shuffle(rng);

            debug!(%day, %shift, need, available = candidates.len(), "Backfilling shift");

            for name in candidates.into_iter().take(need) {
                ledger.assign(name, day, shift, AssignmentSource::Backfill, None);
            }
        }
    }
}
