//! Tower layout, disk ownership and the transfer rule.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::colour::Colour;
use crate::config::{GameConfig, Layout};
use crate::disk::{Disk, DiskId};
use crate::error::HanoiError;
use crate::geometry::Point;
use crate::surface::DrawSurface;
use crate::tower::{TOWER_COUNT, Tower, TowerId};

/// Record of one completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub disk: DiskId,
    /// Tower the disk left, `None` for its first placement.
    pub from: Option<TowerId>,
    /// Tower the disk was dropped on.
    pub requested: TowerId,
    /// Tower the disk ended up on.
    pub destination: TowerId,
}

impl Transfer {
    /// True when the requested tower's top disk was narrower and the disk
    /// went back where it came from.
    pub fn was_rejected(&self) -> bool {
        self.destination != self.requested
    }
}

/// Notified once after every transfer, rejected ones included.
pub trait TransferObserver {
    fn on_disk_transferred(&mut self, board: &TowerManager, transfer: &Transfer);
}

impl TransferObserver for () {
    fn on_disk_transferred(&mut self, _board: &TowerManager, _transfer: &Transfer) {}
}

/// Owns the three towers and every disk of a session.
#[derive(Debug, Clone)]
pub struct TowerManager {
    towers: [Tower; TOWER_COUNT],
    /// Arena indexed by `DiskId`. Stack membership lives in the towers.
    disks: Vec<Disk>,
    layout: Layout,
}

impl TowerManager {
    /// Lays out the towers centred on `surface`, fits the surface height to
    /// them, and stacks every disk on the first tower.
    pub fn new(config: &GameConfig, surface: &mut dyn DrawSurface) -> Result<Self, HanoiError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut widths = config.layout.disk_widths(config.disk_count);
        widths.reverse();

        Self::build(config.layout.clone(), &widths, surface, &mut rng)
    }

    /// `widths` must be ordered widest first.
    fn build(
        layout: Layout,
        widths: &[f64],
        surface: &mut dyn DrawSurface,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, HanoiError> {
        let widest = widths.iter().copied().fold(0.0, f64::max);
        let towers = Self::create_towers(&layout, widest, widths.len(), surface);

        let mut manager = Self {
            towers,
            disks: Vec::with_capacity(widths.len()),
            layout,
        };
        manager.add_initial_disks(widths, rng)?;

        tracing::debug!(
            disks = manager.disks.len(),
            width = surface.width(),
            height = surface.height(),
            "[hanoi] board laid out"
        );
        Ok(manager)
    }

    fn create_towers(
        layout: &Layout,
        widest: f64,
        disk_count: usize,
        surface: &mut dyn DrawSurface,
    ) -> [Tower; TOWER_COUNT] {
        let base_width = widest + layout.base_padding;
        let stem_height = layout.stem_height(disk_count);

        #[allow(clippy::cast_precision_loss)]
        let towers_width = base_width * TOWER_COUNT as f64
            + layout.tower_separation * (TOWER_COUNT - 1) as f64;
        let mut x = (surface.width() - towers_width) / 2.0;

        let towers = TowerId::ALL.map(|id| {
            let tower = Tower::new(
                id,
                Point::new(x, layout.vertical_padding),
                base_width,
                stem_height,
                layout,
            );
            x += base_width + layout.tower_separation;
            tower
        });

        surface.set_height(towers[0].height() + 2.0 * layout.vertical_padding);
        towers
    }

    /// Narrower disks must come later so each lands legally on the one
    /// before it.
    fn add_initial_disks(&mut self, widths: &[f64], rng: &mut ChaCha8Rng) -> Result<(), HanoiError> {
        for (index, &width) in widths.iter().enumerate() {
            let id = DiskId(index);
            let disk = Disk::new(id, width, self.layout.disk_height, Colour::random(rng));
            self.disks.push(disk);
            self.transfer_disk(id, TowerId::FIRST, &mut ())?;
        }
        Ok(())
    }

    /// Moves `id` onto `requested`, or back onto its own tower when the
    /// requested tower's top disk is narrower. Equal widths are allowed.
    ///
    /// `observer` is notified exactly once, whatever the outcome.
    pub fn transfer_disk(
        &mut self,
        id: DiskId,
        requested: TowerId,
        observer: &mut dyn TransferObserver,
    ) -> Result<Transfer, HanoiError> {
        let disk = self.disks.get(id.0).ok_or(HanoiError::UnknownDisk(id))?;
        let from = disk.tower();

        let narrower_top = self.towers[requested.index()]
            .top_disk()
            .and_then(|top| self.disks.get(top.0))
            .is_some_and(|top| top.width() < disk.width());
        let destination = if narrower_top {
            from.ok_or(HanoiError::NoOriginTower(id))?
        } else {
            requested
        };

        let disk = &mut self.disks[id.0];
        if let Some(origin) = from {
            self.towers[origin.index()].remove_disk(disk)?;
        }

        let tower = &mut self.towers[destination.index()];
        disk.move_to(Point::new(
            tower.position().x + (tower.base().width - disk.width()) / 2.0,
            tower.disks_top() - disk.height(),
        ));
        tower.add_disk(disk);
        disk.set_tower(destination);

        let transfer = Transfer {
            disk: id,
            from,
            requested,
            destination,
        };
        tracing::debug!(
            disk = id.0,
            from = ?from.map(TowerId::index),
            requested = requested.index(),
            destination = destination.index(),
            "[hanoi] disk transferred"
        );

        observer.on_disk_transferred(self, &transfer);
        Ok(transfer)
    }

    /// First disk under `point`, searching tower by tower, bottom to top.
    pub fn get_clicked_disk(&self, point: Point) -> Option<DiskId> {
        self.all_disks()
            .find(|disk| disk.is_clicked_on(point))
            .map(Disk::id)
    }

    /// Tower whose top is nearest to `point`. Ties go to the lower index.
    pub fn find_closest_tower(&self, point: Point) -> TowerId {
        let mut closest = &self.towers[0];
        let mut closest_distance = closest.top().distance_to(point);

        for tower in &self.towers[1..] {
            let distance = tower.top().distance_to(point);
            if distance < closest_distance {
                closest = tower;
                closest_distance = distance;
            }
        }

        closest.id()
    }

    /// Moves a disk freely, e.g. while it is being dragged.
    pub fn move_disk(&mut self, id: DiskId, point: Point) -> Result<(), HanoiError> {
        let disk = self.disks.get_mut(id.0).ok_or(HanoiError::UnknownDisk(id))?;
        disk.move_to(point);
        Ok(())
    }

    pub fn is_top_disk(&self, id: DiskId) -> bool {
        self.disk(id).is_some_and(|disk| disk.is_top_disk(&self.towers))
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.clear();
        for tower in &self.towers {
            tower.draw(surface, &self.disks);
        }
    }

    pub fn towers(&self) -> &[Tower; TOWER_COUNT] {
        &self.towers
    }

    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    pub fn disk(&self, id: DiskId) -> Option<&Disk> {
        self.disks.get(id.0)
    }

    /// Every disk, tower by tower, bottom to top.
    pub fn all_disks(&self) -> impl Iterator<Item = &Disk> + '_ {
        self.towers
            .iter()
            .flat_map(|tower| tower.disks().iter())
            .filter_map(|id| self.disks.get(id.0))
    }

    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    const WIDTH: f64 = 800.0;

    fn board(disk_count: usize) -> (TowerManager, RecordingSurface) {
        let mut surface = RecordingSurface::new(WIDTH, 0.0);
        let config = GameConfig::with_disk_count(disk_count).seeded(12345);
        let board = TowerManager::new(&config, &mut surface).unwrap();
        (board, surface)
    }

    fn board_with_widths(widths: &[f64]) -> TowerManager {
        let mut surface = RecordingSurface::new(WIDTH, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        TowerManager::build(Layout::default(), widths, &mut surface, &mut rng).unwrap()
    }

    fn widths_on(board: &TowerManager, tower: TowerId) -> Vec<f64> {
        board
            .tower(tower)
            .disks()
            .iter()
            .map(|&id| board.disk(id).unwrap().width())
            .collect()
    }

    fn tower(index: usize) -> TowerId {
        TowerId::new(index).unwrap()
    }

    #[derive(Default)]
    struct CountingObserver {
        transfers: Vec<Transfer>,
    }

    impl TransferObserver for CountingObserver {
        fn on_disk_transferred(&mut self, _board: &TowerManager, transfer: &Transfer) {
            self.transfers.push(*transfer);
        }
    }

    #[test]
    fn test_towers_centred_and_surface_resized() {
        let (board, surface) = board(3);

        // base 130, separation 16: 3 * 130 + 2 * 16 = 422
        let left = board.tower(tower(0)).position().x;
        let right = board.tower(tower(2)).base().position.x + 130.0;
        assert!((left - (WIDTH - 422.0) / 2.0).abs() < 1e-9);
        assert!((WIDTH - right - left).abs() < 1e-9);

        // stem 3 * 15 + 40 = 85, base 20, padding 2 * 42
        assert!((surface.height() - 189.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_stack_sorted_on_first_tower() {
        let (board, _) = board(4);

        assert_eq!(widths_on(&board, tower(0)), vec![120.0, 100.0, 80.0, 60.0]);
        assert!(board.tower(tower(1)).is_empty());
        assert!(board.tower(tower(2)).is_empty());
        assert_eq!(board.disk_count(), 4);
        assert!(board.all_disks().all(|d| d.tower() == Some(TowerId::FIRST)));
    }

    #[test]
    fn test_initial_disks_rest_on_each_other() {
        let (board, _) = board(2);
        let base = board.tower(tower(0)).base();
        let bottom = board.disk(DiskId(0)).unwrap();
        let top = board.disk(DiskId(1)).unwrap();

        assert!((bottom.position().y + bottom.height() - base.position.y).abs() < 1e-9);
        assert!((top.position().y + top.height() - bottom.position().y).abs() < 1e-9);
        assert!((bottom.centre().x - top.centre().x).abs() < 1e-9);
        assert!((bottom.centre().x - board.tower(tower(0)).top().x).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_colours_deterministic() {
        let (a, _) = board(5);
        let (b, _) = board(5);

        let colours_a: Vec<_> = a.all_disks().map(Disk::colour).collect();
        let colours_b: Vec<_> = b.all_disks().map(Disk::colour).collect();
        assert_eq!(colours_a, colours_b);
    }

    #[test]
    fn test_transfer_to_empty_tower() {
        let (mut board, _) = board(3);
        let mut observer = CountingObserver::default();

        let transfer = board
            .transfer_disk(DiskId(2), tower(1), &mut observer)
            .unwrap();

        assert!(!transfer.was_rejected());
        assert_eq!(transfer.from, Some(tower(0)));
        assert_eq!(widths_on(&board, tower(0)), vec![100.0, 80.0]);
        assert_eq!(widths_on(&board, tower(1)), vec![60.0]);
        assert_eq!(board.disk(DiskId(2)).unwrap().tower(), Some(tower(1)));
        assert_eq!(observer.transfers, vec![transfer]);
    }

    #[test]
    fn test_wider_onto_narrower_snaps_back() {
        let mut board = board_with_widths(&[60.0, 40.0, 20.0]);
        let mut observer = CountingObserver::default();

        board.transfer_disk(DiskId(2), tower(1), &mut observer).unwrap();
        let transfer = board
            .transfer_disk(DiskId(1), tower(1), &mut observer)
            .unwrap();

        assert!(transfer.was_rejected());
        assert_eq!(transfer.destination, tower(0));
        assert_eq!(widths_on(&board, tower(0)), vec![60.0, 40.0]);
        assert_eq!(widths_on(&board, tower(1)), vec![20.0]);
        // the rejected drop is still observed
        assert_eq!(observer.transfers.len(), 2);
    }

    #[test]
    fn test_redrop_after_drag_restores_resting_position() {
        let mut board = board_with_widths(&[60.0, 40.0, 20.0]);
        let before = board.disk(DiskId(2)).unwrap().position();

        board.move_disk(DiskId(2), Point::new(500.0, 3.0)).unwrap();
        board.transfer_disk(DiskId(2), tower(0), &mut ()).unwrap();

        assert_eq!(board.disk(DiskId(2)).unwrap().position(), before);
    }

    #[test]
    fn test_equal_width_is_legal() {
        let mut board = board_with_widths(&[60.0, 40.0, 40.0]);

        board.transfer_disk(DiskId(2), tower(1), &mut ()).unwrap();
        let transfer = board.transfer_disk(DiskId(1), tower(1), &mut ()).unwrap();

        assert!(!transfer.was_rejected());
        assert_eq!(widths_on(&board, tower(1)), vec![40.0, 40.0]);
    }

    #[test]
    fn test_one_wider_is_rejected() {
        let mut board = board_with_widths(&[60.0, 41.0, 40.0]);

        board.transfer_disk(DiskId(2), tower(1), &mut ()).unwrap();
        let transfer = board.transfer_disk(DiskId(1), tower(1), &mut ()).unwrap();

        assert!(transfer.was_rejected());
        assert_eq!(widths_on(&board, tower(0)), vec![60.0, 41.0]);
    }

    #[test]
    fn test_redrop_on_own_tower_is_observed() {
        let (mut board, _) = board(2);
        let mut observer = CountingObserver::default();
        let before = board.disk(DiskId(1)).unwrap().position();

        let transfer = board
            .transfer_disk(DiskId(1), tower(0), &mut observer)
            .unwrap();

        assert!(!transfer.was_rejected());
        assert_eq!(transfer.from, Some(tower(0)));
        assert_eq!(board.tower(tower(0)).disks(), &[DiskId(0), DiskId(1)]);
        assert_eq!(board.disk(DiskId(1)).unwrap().position(), before);
        assert_eq!(observer.transfers.len(), 1);
    }

    #[test]
    fn test_unknown_disk() {
        let (mut board, _) = board(2);
        assert_eq!(
            board.transfer_disk(DiskId(9), tower(1), &mut ()),
            Err(HanoiError::UnknownDisk(DiskId(9)))
        );
        assert!(board.move_disk(DiskId(9), Point::ORIGIN).is_err());
    }

    #[test]
    fn test_clicked_disk() {
        let (board, _) = board(2);
        let top = board.disk(DiskId(1)).unwrap();
        let position = top.position();

        assert_eq!(board.get_clicked_disk(position), Some(DiskId(1)));
        assert_eq!(
            board.get_clicked_disk(Point::new(position.x + top.width(), position.y)),
            None
        );
        assert_eq!(
            board.get_clicked_disk(Point::new(position.x, position.y + top.height())),
            Some(DiskId(0))
        );
        assert_eq!(board.get_clicked_disk(Point::ORIGIN), None);
    }

    #[test]
    fn test_top_disk_queries() {
        let (board, _) = board(3);
        assert!(board.is_top_disk(DiskId(2)));
        assert!(!board.is_top_disk(DiskId(1)));
        assert!(!board.is_top_disk(DiskId(0)));
        assert!(!board.is_top_disk(DiskId(7)));
    }

    #[test]
    fn test_closest_tower() {
        let (board, _) = board(3);
        for id in TowerId::ALL {
            let top = board.tower(id).top();
            assert_eq!(board.find_closest_tower(Point::new(top.x + 3.0, top.y + 50.0)), id);
        }
    }

    #[test]
    fn test_closest_tower_tie_goes_to_lower_index() {
        let (board, _) = board(3);
        let a = board.tower(tower(0)).top();
        let b = board.tower(tower(1)).top();
        let midpoint = Point::new((a.x + b.x) / 2.0, a.y + 10.0);

        assert_eq!(board.find_closest_tower(midpoint), tower(0));

        let c = board.tower(tower(2)).top();
        let midpoint = Point::new((b.x + c.x) / 2.0, b.y);
        assert_eq!(board.find_closest_tower(midpoint), tower(1));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let (board, mut surface) = board(4);

        board.draw(&mut surface);
        let first = surface.last_frame().to_vec();
        board.draw(&mut surface);
        let second = surface.last_frame().to_vec();

        assert_eq!(first, second);
        assert_eq!(surface.frame_count(), 2);
    }

    #[test]
    fn test_draw_fills_towers_and_disks() {
        let (board, mut surface) = board(2);
        board.draw(&mut surface);

        // two rects (base + stem) per tower, one per disk
        assert_eq!(surface.filled_rects().len(), 2 * TOWER_COUNT + 2);
        for disk in board.all_disks() {
            assert!(surface.filled_rects().contains(&(disk.bounds(), disk.colour())));
        }
    }
}
