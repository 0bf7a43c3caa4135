use memory_pairs::core::GameState;
use memory_pairs::term::{GameView, Selection, Viewport};
use memory_pairs::types::{Difficulty, Phase};

fn text(fb: &memory_pairs::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_menu_when_idle() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state.snapshot(), Selection::default(), Viewport::new(80, 24));

    let all = text(&fb);
    assert!(all.contains("Найди пару"));
    assert!(all.contains("Выбери уровень сложности"));
}

#[test]
fn term_view_renders_one_placeholder_per_face_down_card() {
    let mut state = GameState::new(1);
    state.initialize(Difficulty::Hard);
    let fb = GameView::default().render(&state.snapshot(), Selection::default(), Viewport::new(80, 24));

    let count = text(&fb).chars().filter(|&c| c == '?').count();
    assert_eq!(count, 14);
}

#[test]
fn term_view_click_flips_through_hit_test() {
    let mut state = GameState::new(1);
    state.initialize(Difficulty::Easy);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    // Scan the screen for the first cell that maps to card 3.
    let snap = state.snapshot();
    let hit = (0..vp.height)
        .flat_map(|y| (0..vp.width).map(move |x| (x, y)))
        .find(|&(x, y)| view.hit_test(&snap, vp, x, y) == Some(3));
    let (x, y) = hit.expect("card 3 is on screen");

    let id = view.hit_test(&snap, vp, x, y).unwrap();
    assert!(state.flip(id));
    assert_eq!(state.phase(), Phase::Running);

    let fb = view.render(&state.snapshot(), Selection::default(), vp);
    assert_eq!(text(&fb).chars().filter(|&c| c == '?').count(), 9);
}
