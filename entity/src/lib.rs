pub mod attendance;
pub mod member;
pub mod setting;
pub mod team;

/*
 A team is created together with its members or not at all: the member insert
 step has a compensating team delete, so listings never show a memberless team
 for longer than the compensation window.
 Members carry the globally unique registration identifier and email; both are
 enforced by unique indexes, not by application-side checks.
 Attendance rows exist at most once per identifier (unique index again) and are
 freely deleted and recreated as people are marked absent / re-scanned.
 */
