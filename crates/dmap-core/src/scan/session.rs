//! Scan session
//!
//! One [`DungeonScan`] lives for one dungeon instance. The host calls
//! [`DungeonScan::on_enter`] when the dungeon starts, [`DungeonScan::on_tick`]
//! from its tick hook, and [`DungeonScan::on_exit`] when the run ends. Every
//! sweep only samples cells that are still unresolved, so late-loading chunks
//! are picked up without ever re-identifying a room.

use crate::catalog::RoomCatalog;
use crate::config::ScanConfig;
use crate::consts::GRID_SIZE;
use crate::dungeon::{CellPos, DoorRegistry, DoorType, DungeonMap, Room, RoomId};
use crate::world::WorldSource;

use super::builder::{self, CellOutcome, Deferral};
use super::doors;

/// Per-cell bookkeeping between sweeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Untried,
    /// Attempted without success; holds the attempt count and the last reason
    Deferred { attempts: u32, reason: Deferral },
    Resolved,
}

/// What one sweep changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub cells_resolved: usize,
    pub cells_deferred: usize,
    pub merges: usize,
    pub rooms_oriented: usize,
    pub doors_added: usize,
}

impl SweepReport {
    pub fn changed(&self) -> bool {
        self.cells_resolved + self.merges + self.rooms_oriented + self.doors_added > 0
    }
}

/// How far discovery has come
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanProgress {
    pub cells_with_room: usize,
    pub cells_attempted: usize,
    /// Cells whose column is loaded and empty
    pub cells_empty: usize,
    pub rooms: usize,
    pub doors: usize,
}

/// Session-scoped scanner state
#[derive(Debug)]
pub struct DungeonScan<C> {
    catalog: C,
    config: ScanConfig,
    map: DungeonMap,
    doors: DoorRegistry,
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
    ticks: u64,
    active: bool,
}

impl<C: RoomCatalog> DungeonScan<C> {
    pub fn new(catalog: C, config: ScanConfig) -> Self {
        Self {
            catalog,
            config,
            map: DungeonMap::new(),
            doors: DoorRegistry::new(),
            cells: Default::default(),
            ticks: 0,
            active: false,
        }
    }

    pub fn with_default_config(catalog: C) -> Self {
        Self::new(catalog, ScanConfig::default())
    }

    /// Start a fresh session and sweep all 36 cells plus doors
    pub fn on_enter<W: WorldSource + ?Sized>(&mut self, world: &W) -> SweepReport {
        self.reset();
        self.active = true;
        log::info!("dungeon entered, starting full sweep");
        let report = self.sweep(world);
        log::info!(
            "initial sweep: {} cells resolved, {} deferred, {} doors",
            report.cells_resolved,
            report.cells_deferred,
            report.doors_added
        );
        report
    }

    /// Tick hook; sweeps every `rescan_interval` ticks while a session is active
    pub fn on_tick<W: WorldSource + ?Sized>(&mut self, world: &W) -> Option<SweepReport> {
        if !self.active {
            return None;
        }
        self.ticks += 1;
        if self.ticks % u64::from(self.config.rescan_interval.max(1)) != 0 {
            return None;
        }
        let report = self.sweep(world);
        if report.changed() {
            log::info!(
                "tick {}: {} cells resolved, {} merges, {} doors added",
                self.ticks,
                report.cells_resolved,
                report.merges,
                report.doors_added
            );
        }
        Some(report)
    }

    /// End of the dungeon run
    pub fn on_exit(&mut self) {
        log::info!(
            "dungeon exited after {} ticks with {} rooms",
            self.ticks,
            self.map.room_count()
        );
        self.reset();
    }

    /// Drop all discovered state in one step
    pub fn reset(&mut self) {
        self.map.clear();
        self.doors.clear();
        self.cells = Default::default();
        self.ticks = 0;
        self.active = false;
    }

    /// One incremental pass: unresolved cells, merge, pending rotations, doors
    pub fn sweep<W: WorldSource + ?Sized>(&mut self, world: &W) -> SweepReport {
        let mut report = SweepReport::default();

        for cell in CellPos::all() {
            if self.map.has_room(cell) {
                continue;
            }
            if self.scan_cell(world, cell).is_resolved() {
                report.cells_resolved += 1;
            } else {
                report.cells_deferred += 1;
            }
        }

        if self.config.merge_pass {
            report.merges = self.merge_disconnected_rooms();
        }
        if self.config.detect_rotation {
            report.rooms_oriented = self.orient_pending(world);
        }
        if self.config.classify_doors {
            report.doors_added = self.scan_all_doors(world);
        }
        report
    }

    /// Scan a single cell and update its bookkeeping
    pub fn scan_cell<W: WorldSource + ?Sized>(&mut self, world: &W, cell: CellPos) -> CellOutcome {
        let outcome = builder::scan_cell(
            &mut self.map,
            world,
            &self.catalog,
            cell,
            self.config.detect_rotation,
        );
        let state = &mut self.cells[cell.x as usize][cell.z as usize];
        *state = match outcome {
            CellOutcome::Deferred(reason) => {
                let attempts = match *state {
                    CellState::Deferred { attempts, .. } => attempts + 1,
                    _ => 1,
                };
                CellState::Deferred { attempts, reason }
            }
            _ => CellState::Resolved,
        };
        outcome
    }

    pub fn merge_disconnected_rooms(&mut self) -> usize {
        builder::merge_disconnected_rooms(&mut self.map)
    }

    /// Retry rotation for rooms that could not be oriented earlier
    pub fn orient_pending<W: WorldSource + ?Sized>(&mut self, world: &W) -> usize {
        let pending: Vec<RoomId> = self
            .map
            .rooms()
            .filter(|(_, room)| !room.is_oriented())
            .map(|(id, _)| id)
            .collect();
        pending
            .into_iter()
            .filter(|&id| builder::orient_room(&mut self.map, world, id))
            .count()
    }

    pub fn scan_all_doors<W: WorldSource + ?Sized>(&mut self, world: &W) -> usize {
        doors::scan_all_doors(world, &self.map, &mut self.doors)
    }

    pub fn door_type(&self, a: CellPos, b: CellPos) -> DoorType {
        self.doors.door_type(a, b)
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn doors(&self) -> &DoorRegistry {
        &self.doors
    }

    /// Distinct rooms on the grid
    pub fn rooms(&self) -> Vec<(RoomId, &Room)> {
        self.map.all_rooms()
    }

    pub fn room_at(&self, cell: CellPos) -> Option<&Room> {
        self.map.room_at(cell)
    }

    pub fn cell_state(&self, cell: CellPos) -> CellState {
        self.cells[cell.x as usize][cell.z as usize]
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn progress(&self) -> ScanProgress {
        let mut progress = ScanProgress {
            rooms: self.map.room_count(),
            doors: self.doors.len(),
            ..ScanProgress::default()
        };
        for cell in CellPos::all() {
            if self.map.has_room(cell) {
                progress.cells_with_room += 1;
            }
            match self.cell_state(cell) {
                CellState::Untried => {}
                CellState::Resolved => progress.cells_attempted += 1,
                CellState::Deferred { reason, .. } => {
                    progress.cells_attempted += 1;
                    if reason == Deferral::Empty {
                        progress.cells_empty += 1;
                    }
                }
            }
        }
        progress
    }

    /// Every cell holds a room or is known to be empty, and every room is
    /// oriented
    pub fn is_fully_scanned(&self) -> bool {
        let progress = self.progress();
        progress.cells_with_room + progress.cells_empty == GRID_SIZE * GRID_SIZE
            && self.map.rooms().all(|(_, room)| room.is_oriented())
    }
}
