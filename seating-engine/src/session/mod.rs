//! Seating Session
//!
//! One planner's working state: configuration, the guest roster, the viewport
//! reported by the host, and the [`InteractionController`] that owns the
//! tables. Hosts either call the methods directly or send [`SeatingIntent`]s
//! through [`SeatingSession::dispatch`].
//!
//! [`SeatingIntent`]: shared::SeatingIntent

mod dispatch;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, Guest, PendingMove, SeatingPlan,
    SeatingSnapshot, UiState, Venue, Viewport,
};
use shared::types::{GuestId, TableId};
use tracing::{debug, info, warn};

use crate::assignment::{AssignmentSummary, unassigned_guests};
use crate::controller::{InteractionController, MoveOutcome};
use crate::core::{Config, SeatingError, SeatingResult};
use crate::geometry::compute_scale_with_cap;
use crate::registry::TableRegistry;
use crate::render::{
    DrawableTable, GuestChip, VenueFrame, project_guests, project_tables, project_venue,
};
use crate::utils::validation::validate_viewport;

/// Everything the host needs to draw the seating screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatingView {
    pub venue: Venue,
    /// Pixels per meter, zoom included
    pub scale: f64,
    pub ui: UiState,
    pub pending_move: Option<PendingMove>,
    pub tables: Vec<DiningTable>,
    pub unassigned: Vec<GuestChip>,
    pub drawables: Vec<DrawableTable>,
    pub venue_frame: VenueFrame,
    pub summary: AssignmentSummary,
}

pub struct SeatingSession {
    config: Config,
    roster: Vec<Guest>,
    viewport: Viewport,
    controller: InteractionController,
}

impl SeatingSession {
    /// Empty session on the configured default venue and viewport
    pub fn new(config: Config) -> SeatingResult<Self> {
        let viewport = config.default_viewport();
        validate_viewport(&viewport)?;
        let registry = TableRegistry::new(config.default_venue())?;
        Ok(Self {
            controller: InteractionController::new(registry, config.clone()),
            config,
            roster: Vec::new(),
            viewport,
        })
    }

    /// Rebuild a session from a plan exported by the host
    pub fn from_plan(config: Config, plan: SeatingPlan) -> SeatingResult<Self> {
        let mut session = Self::new(config)?;
        if let Some(viewport) = plan.viewport {
            session.set_viewport(viewport.max_width, viewport.max_height)?;
        }
        let snapshot = plan.snapshot();
        session.roster = plan.guests;
        session.restore(snapshot)?;
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn roster(&self) -> &[Guest] {
        &self.roster
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn registry(&self) -> &TableRegistry {
        self.controller.registry()
    }

    pub fn guest(&self, guest_id: GuestId) -> Option<&Guest> {
        self.roster.iter().find(|g| g.id == guest_id)
    }

    fn require_guest(&self, guest_id: GuestId) -> SeatingResult<()> {
        if self.guest(guest_id).is_none() {
            return Err(SeatingError::GuestNotFound(guest_id));
        }
        Ok(())
    }

    // ========== Venue / viewport ==========

    /// Returns how many tables were pulled back inside the venue
    pub fn set_venue_dimensions(&mut self, width: f64, height: f64) -> SeatingResult<usize> {
        self.controller.resize_venue(width, height)
    }

    pub fn set_viewport(&mut self, max_width: f64, max_height: f64) -> SeatingResult<()> {
        let viewport = Viewport::new(max_width, max_height);
        validate_viewport(&viewport)?;
        debug!(max_width, max_height, "Viewport changed");
        self.viewport = viewport;
        Ok(())
    }

    // ========== Roster ==========

    /// Replace the roster
    ///
    /// Guests missing from the new roster lose their seats; the released ids
    /// are returned. A pending move of such a guest is dropped.
    pub fn set_roster(&mut self, guests: Vec<Guest>) -> Vec<GuestId> {
        self.roster = guests;
        let released = self.release_orphans();
        let orphaned_move = self
            .controller
            .pending_move()
            .is_some_and(|p| self.guest(p.guest_id).is_none());
        if orphaned_move {
            self.controller.cancel_move();
        }
        info!(
            guests = self.roster.len(),
            released = released.len(),
            "Roster replaced"
        );
        released
    }

    fn release_orphans(&mut self) -> Vec<GuestId> {
        let known: HashSet<GuestId> = self.roster.iter().map(|g| g.id).collect();
        let released = self
            .controller
            .registry_mut()
            .release_guests_where(|id| known.contains(&id));
        if !released.is_empty() {
            warn!(released = ?released, "Released seats of guests not in the roster");
        }
        released
    }

    // ========== Tables ==========

    pub fn create_table(&mut self, data: DiningTableCreate) -> DiningTable {
        self.controller.create_table(data)
    }

    pub fn update_table(
        &mut self,
        id: TableId,
        data: DiningTableUpdate,
    ) -> SeatingResult<DiningTable> {
        self.controller.update_table(id, data)
    }

    pub fn delete_table(&mut self, id: TableId) -> SeatingResult<DiningTable> {
        self.controller.delete_table(id)
    }

    // ========== Assignment ==========

    /// Seat a roster guest, moving it off any other table in one step
    pub fn assign_guest(
        &mut self,
        table_id: TableId,
        guest_id: GuestId,
    ) -> SeatingResult<MoveOutcome> {
        self.require_guest(guest_id)?;
        self.controller.move_guest(guest_id, table_id)
    }

    pub fn unassign_guest(&mut self, table_id: TableId, guest_id: GuestId) -> SeatingResult<bool> {
        self.controller.remove_from_table(table_id, guest_id)
    }

    pub fn begin_move(&mut self, guest_id: GuestId) -> SeatingResult<PendingMove> {
        self.require_guest(guest_id)?;
        Ok(self.controller.begin_move(guest_id))
    }

    pub fn complete_move(&mut self, table_id: TableId) -> SeatingResult<MoveOutcome> {
        self.controller.complete_move(table_id)
    }

    pub fn cancel_move(&mut self) -> Option<PendingMove> {
        self.controller.cancel_move()
    }

    // ========== View state ==========

    pub fn select_table(&mut self, table_id: Option<TableId>) -> SeatingResult<()> {
        self.controller.select_table(table_id)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.controller.set_zoom(zoom)
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.controller.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.controller.zoom_out()
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.controller.reset_zoom()
    }

    pub fn open_table_form(&mut self) -> DiningTableCreate {
        self.controller.open_table_form().clone()
    }

    pub fn edit_table_form(&mut self, patch: DiningTableUpdate) -> SeatingResult<DiningTableCreate> {
        self.controller.edit_table_form(patch).cloned()
    }

    pub fn submit_table_form(&mut self) -> SeatingResult<DiningTable> {
        self.controller.submit_table_form()
    }

    pub fn cancel_table_form(&mut self) -> bool {
        self.controller.cancel_table_form()
    }

    // ========== Derived data ==========

    /// Current pixels per meter
    pub fn scale(&self) -> SeatingResult<f64> {
        compute_scale_with_cap(
            &self.registry().venue(),
            &self.viewport,
            self.controller.ui().zoom,
            self.config.scale_cap,
        )
    }

    pub fn unassigned(&self) -> Vec<&Guest> {
        unassigned_guests(&self.roster, self.registry().tables())
    }

    pub fn view(&self) -> SeatingResult<SeatingView> {
        let scale = self.scale()?;
        let registry = self.registry();
        let ui = self.controller.ui().clone();
        Ok(SeatingView {
            venue: registry.venue(),
            scale,
            drawables: project_tables(registry.tables(), scale, ui.selected_table_id),
            venue_frame: project_venue(&registry.venue(), scale),
            ui,
            pending_move: self.controller.pending_move().copied(),
            tables: registry.tables().to_vec(),
            unassigned: project_guests(self.unassigned()),
            summary: AssignmentSummary::compute(&self.roster, registry.tables()),
        })
    }

    // ========== Persistence records ==========

    pub fn snapshot(&self) -> SeatingSnapshot {
        SeatingSnapshot {
            venue: self.registry().venue(),
            tables: self.registry().tables().to_vec(),
        }
    }

    /// Replace venue and tables from a stored snapshot
    ///
    /// Seats held by guests outside the current roster are released. On
    /// error the session is left as it was.
    pub fn restore(&mut self, snapshot: SeatingSnapshot) -> SeatingResult<()> {
        let registry = TableRegistry::from_parts(snapshot.venue, snapshot.tables)?;
        self.controller.replace_registry(registry);
        self.release_orphans();
        info!(
            tables = self.registry().len(),
            width = snapshot.venue.width,
            height = snapshot.venue.height,
            "Seating restored"
        );
        Ok(())
    }
}
