//! Domain entities, ports, and flows.
//!
//! Purpose: define the strongly typed entity shapes, the driven ports at
//! the hexagon's edge, and the flow services the presentation layer calls.
//! Flows are plain async functions on service types; adapters are injected
//! as `Arc` handles, never reached through module-level singletons.

pub mod airport;
pub mod company_document;
pub mod customer;
pub mod entity_flows;
pub mod error;
pub mod fbo_lookup;
pub mod fleet_aircraft;
pub mod flight_estimation;
pub mod maintenance_task;
pub mod mel_item;
pub mod notification;
pub mod performance;
pub mod ports;
pub mod record;
pub mod role;
pub mod route_suggestion;
pub mod validation;

pub use self::airport::{AirportCode, AirportCodeValidationError};
pub use self::company_document::{CompanyDocument, DocumentType, SaveCompanyDocumentInput};
pub use self::customer::{Customer, CustomerType, SaveCustomerInput};
pub use self::entity_flows::{
    AircraftPerformanceFlows, CompanyDocumentFlows, CustomerFlows, DeleteOutcome, EntityFlows,
    FleetAircraftFlows, MaintenanceTaskFlows, MelItemFlows, NotificationFlows, RoleFlows,
};
pub use self::error::FlowError;
pub use self::fbo_lookup::FboLookupService;
pub use self::fleet_aircraft::{FleetAircraft, SaveFleetAircraftInput};
pub use self::flight_estimation::{
    FlightEstimate, FlightEstimationRequest, FlightEstimationService,
};
pub use self::maintenance_task::{
    MaintenanceTask, MaintenanceTaskStatus, SaveMaintenanceTaskInput,
};
pub use self::mel_item::{MelCategory, MelItem, MelStatus, SaveMelItemInput};
pub use self::notification::{Notification, NotificationType, SaveNotificationInput};
pub use self::performance::{AircraftPerformanceData, SaveAircraftPerformanceDataInput};
pub use self::record::decode_save_input;
pub use self::role::{Permission, Role, SaveRoleInput};
pub use self::route_suggestion::{
    RouteSuggestionRequest, RouteSuggestionService, SuggestedRoute,
};
pub use self::validation::{FieldViolation, ValidationErrors, Violations};

/// Convenient flow result alias.
pub type FlowResult<T> = Result<T, FlowError>;
