//! End-to-end games driven through pointer events.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use hanoi_core::{
    DiskId, Game, GameConfig, GamePhase, NoopDiagnostics, Point, RecordingSurface, TowerId,
};

struct Harness {
    game: Game<RecordingSurface>,
    victories: Rc<Cell<u32>>,
}

impl Harness {
    fn new(disk_count: usize) -> Self {
        let victories = Rc::new(Cell::new(0));
        let counter = victories.clone();
        let game = Game::new(
            RecordingSurface::new(1024.0, 0.0),
            &GameConfig::with_disk_count(disk_count).seeded(2024),
            Rc::new(NoopDiagnostics),
            Box::new(move || counter.set(counter.get() + 1)),
        )
        .unwrap();
        Self { game, victories }
    }

    fn tower(index: usize) -> TowerId {
        TowerId::new(index).unwrap()
    }

    fn top_of(&self, tower: usize) -> DiskId {
        self.game
            .session()
            .board()
            .tower(Self::tower(tower))
            .top_disk()
            .unwrap()
    }

    /// Grabs the disk at its centre and releases it over `to`'s stem.
    fn drag(&mut self, disk: DiskId, to: usize) {
        let board = self.game.session().board();
        let grab = board.disk(disk).unwrap().centre();
        let target = board.tower(Self::tower(to)).top();

        self.game.pointer_down(grab);
        self.game.pointer_move(Point::new(grab.x + 1.0, grab.y - 30.0)).unwrap();
        self.game.pointer_move(target).unwrap();
        self.game.pointer_up().unwrap();
        self.assert_invariants();
    }

    fn move_top(&mut self, from: usize, to: usize) {
        let disk = self.top_of(from);
        self.drag(disk, to);
    }

    fn widths(&self, tower: usize) -> Vec<f64> {
        let board = self.game.session().board();
        board
            .tower(Self::tower(tower))
            .disks()
            .iter()
            .map(|&id| board.disk(id).unwrap().width())
            .collect()
    }

    fn assert_invariants(&self) {
        let board = self.game.session().board();

        for tower in board.towers() {
            let widths = self.widths(tower.id().index());
            assert!(
                widths.windows(2).all(|pair| pair[1] <= pair[0]),
                "{tower} is not sorted: {widths:?}"
            );
            for &id in tower.disks() {
                assert_eq!(board.disk(id).unwrap().tower(), Some(tower.id()));
            }
        }

        let on_towers: BTreeSet<_> = board.towers().iter().flat_map(|t| t.disks().to_vec()).collect();
        let all: BTreeSet<_> = (0..board.disk_count()).map(DiskId).collect();
        let stacked: usize = board.towers().iter().map(|t| t.len()).sum();
        assert_eq!(on_towers, all);
        assert_eq!(stacked, board.disk_count());
    }
}

fn solve(harness: &mut Harness, n: usize, from: usize, to: usize, via: usize) {
    if n == 0 {
        return;
    }
    solve(harness, n - 1, from, via, to);
    harness.move_top(from, to);
    solve(harness, n - 1, via, to, from);
}

#[test]
fn test_full_solve_fires_victory_once() {
    let mut harness = Harness::new(4);

    solve(&mut harness, 4, 0, 2, 1);

    assert_eq!(harness.widths(2), vec![120.0, 100.0, 80.0, 60.0]);
    assert_eq!(harness.victories.get(), 1);
    assert_eq!(harness.game.session().game_state().phase(), GamePhase::Won);
    assert!(!harness.game.session().input().is_input_enabled());
}

#[test]
fn test_victory_only_after_last_disk() {
    let mut harness = Harness::new(2);

    harness.move_top(0, 1);
    assert_eq!(harness.victories.get(), 0);

    harness.move_top(0, 1);
    assert_eq!(harness.victories.get(), 1);
}

#[test]
fn test_rejected_drop_snaps_back() {
    let mut harness = Harness::new(3);

    harness.move_top(0, 1);
    let middle = harness.top_of(0);
    harness.drag(middle, 1);

    assert_eq!(harness.widths(0), vec![100.0, 80.0]);
    assert_eq!(harness.widths(1), vec![60.0]);
    assert_eq!(harness.victories.get(), 0);
}

#[test]
fn test_covered_disk_cannot_be_dragged() {
    let mut harness = Harness::new(3);
    let bottom = DiskId(0);

    harness.drag(bottom, 2);

    assert_eq!(harness.widths(0), vec![100.0, 80.0, 60.0]);
    assert!(harness.widths(2).is_empty());
}

#[test]
fn test_no_grabs_after_victory() {
    let mut harness = Harness::new(1);
    harness.move_top(0, 1);
    assert_eq!(harness.victories.get(), 1);

    harness.move_top(1, 2);

    assert_eq!(harness.widths(1), vec![60.0]);
    assert_eq!(harness.victories.get(), 1);
}

#[test]
fn test_single_disk_redrop_is_not_a_win() {
    let mut harness = Harness::new(1);

    harness.move_top(0, 0);

    assert_eq!(harness.victories.get(), 0);
    assert!(harness.game.session().input().is_input_enabled());
}

#[test]
fn test_every_move_and_drop_redraws() {
    let mut harness = Harness::new(2);
    let before = harness.game.surface().frame_count();

    harness.move_top(0, 2);

    // two moves and one drop
    assert_eq!(harness.game.surface().frame_count(), before + 3);
}

#[test]
fn test_new_game_after_victory() {
    let mut harness = Harness::new(1);
    harness.move_top(0, 2);
    let stale = harness.game.redraw_request();

    harness
        .game
        .start_new(&GameConfig::with_disk_count(3).seeded(8))
        .unwrap();
    let frame = harness.game.surface().last_frame().to_vec();

    assert!(!harness.game.redraw(stale));
    assert_eq!(harness.game.surface().last_frame(), frame.as_slice());
    assert_eq!(harness.widths(0), vec![100.0, 80.0, 60.0]);

    harness.move_top(0, 1);
    harness.move_top(0, 2);
    harness.move_top(1, 2);
    harness.move_top(0, 1);
    harness.move_top(2, 0);
    harness.move_top(2, 1);
    harness.move_top(0, 1);
    assert_eq!(harness.victories.get(), 2);
}
