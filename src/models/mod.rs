//! Planning domain models.
//!
//! Provides the data types shared by the catalog, the generator and the
//! placement engine. Every type is plain serializable data so a session
//! store can persist it as-is.
//!
//! # Domain Mappings
//!
//! | visit-planner | Field operations |
//! |---------------|------------------|
//! | VisitTypeRule | Audit / coaching / workshop obligation |
//! | RosterEntity | Restaurant or site |
//! | GeneratedVisitInstance | Tile in the visit bank |
//! | PlacedVisit | Tile on the calendar grid |
//! | PeriodDescriptor | Fiscal period (4 weeks) |

mod interval;
mod period;
mod roster;
mod schedule;
mod visit;
mod visit_type;

pub use interval::HourWindow;
pub use period::{
    FiscalCalendar, PeriodCalendar, PeriodDescriptor, WeekDescriptor, DAYS_PER_WEEK,
    MAX_WEEKS_PER_YEAR,
};
pub use roster::RosterEntity;
pub use schedule::{PeriodSchedule, VisitSchedule};
pub use visit::{new_visit_id, GeneratedVisitInstance, PlacedVisit, VisitPosition};
pub use visit_type::{Applicability, ColorPair, VisitScope, VisitTypeRule};
