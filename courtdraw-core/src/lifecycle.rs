//! Tournament lifecycle - status transitions and registration rules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a tournament is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Draft,
    SetupComplete,
    ReadyForRegistration,
    WaitingListOpen,
    RegistrationOpen,
    RegistrationClosed,
    DrawsComplete,
    Live,
    Completed,
    Cancelled,
}

/// How players get onto the roster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationType {
    /// Players register through the online form
    OnlineForm,
    /// Only organizers add players
    ManualOnly,
    /// Both
    Hybrid,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 10] = [
        TournamentStatus::Draft,
        TournamentStatus::SetupComplete,
        TournamentStatus::ReadyForRegistration,
        TournamentStatus::WaitingListOpen,
        TournamentStatus::RegistrationOpen,
        TournamentStatus::RegistrationClosed,
        TournamentStatus::DrawsComplete,
        TournamentStatus::Live,
        TournamentStatus::Completed,
        TournamentStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentStatus::Draft => "draft",
            TournamentStatus::SetupComplete => "setup_complete",
            TournamentStatus::ReadyForRegistration => "ready_for_registration",
            TournamentStatus::WaitingListOpen => "waiting_list_open",
            TournamentStatus::RegistrationOpen => "registration_open",
            TournamentStatus::RegistrationClosed => "registration_closed",
            TournamentStatus::DrawsComplete => "draws_complete",
            TournamentStatus::Live => "live",
            TournamentStatus::Completed => "completed",
            TournamentStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable in one step
    pub fn next_statuses(self) -> &'static [TournamentStatus] {
        use TournamentStatus::*;
        match self {
            // Going back to draft is allowed while setup is being revised
            Draft => &[SetupComplete, Cancelled],
            SetupComplete => &[ReadyForRegistration, Cancelled, Draft],
            ReadyForRegistration => &[RegistrationOpen, SetupComplete, Cancelled],
            WaitingListOpen => &[RegistrationOpen, ReadyForRegistration, Cancelled],
            RegistrationOpen => &[RegistrationClosed, Cancelled],
            RegistrationClosed => &[DrawsComplete, RegistrationOpen, Cancelled],
            DrawsComplete => &[Live, Cancelled],
            Live => &[Completed, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: TournamentStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Move to `next`, failing when the lifecycle does not allow it
    pub fn transition(self, next: TournamentStatus) -> Result<TournamentStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_final(self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Checklist an organizer must satisfy before entering this status
    pub fn requirements(self) -> &'static [&'static str] {
        match self {
            TournamentStatus::Draft | TournamentStatus::Cancelled => &[],
            TournamentStatus::SetupComplete => &[
                "Basic tournament information (name, venue)",
                "Start and end dates defined",
                "Tournament rules document",
                "At least one category defined",
            ],
            TournamentStatus::ReadyForRegistration => &[
                "All setup complete requirements met",
                "Registration deadline set",
                "Maximum participants per category defined",
                "Registration type selected (online/manual/hybrid)",
                "Required player information fields configured",
            ],
            TournamentStatus::WaitingListOpen => &["Ready for registration", "Waiting list enabled"],
            TournamentStatus::RegistrationOpen => {
                &["Ready for registration", "Registration officially launched"]
            }
            TournamentStatus::RegistrationClosed => &["Registration deadline reached"],
            TournamentStatus::DrawsComplete => {
                &["All brackets/groups created", "Match schedule generated"]
            }
            TournamentStatus::Live => &["Tournament start date reached"],
            TournamentStatus::Completed => &["All matches completed", "Final results recorded"],
        }
    }

    /// Players may sign themselves up
    pub fn is_registration_allowed(self, registration: RegistrationType) -> bool {
        self == TournamentStatus::RegistrationOpen
            && matches!(
                registration,
                RegistrationType::OnlineForm | RegistrationType::Hybrid
            )
    }

    pub fn is_waiting_list_allowed(self) -> bool {
        self == TournamentStatus::WaitingListOpen
    }

    /// Organizers may add players by hand
    pub fn is_manual_entry_allowed(self, registration: RegistrationType) -> bool {
        if matches!(
            self,
            TournamentStatus::Cancelled | TournamentStatus::Completed | TournamentStatus::Live
        ) {
            return false;
        }
        matches!(
            registration,
            RegistrationType::ManualOnly | RegistrationType::Hybrid
        )
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
