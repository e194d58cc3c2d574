use pullcord_core::{DragPhase, PullChain, PullChainParams, Theme, ThemeConfig};

const REST: f64 = 40.0;

fn drag(chain: &mut PullChain, start_y: f64, moves: &[f64], now_ms: f64) -> Option<bool> {
    if !chain.begin(start_y, REST, now_ms) {
        return None;
    }
    for y in moves {
        chain.drag_to(*y);
    }
    chain.release(now_ms).map(|release| release.committed)
}

#[test]
fn full_pull_flips_theme_once() {
    let mut chain = PullChain::default();
    let committed = drag(&mut chain, 100.0, &[102.0, 105.0, 130.0], 1_000.0);
    assert_eq!(committed, Some(true));
    assert_eq!(chain.theme(), Theme::Light);
}

#[test]
fn pull_of_exactly_one_pixel_commits() {
    let mut chain = PullChain::default();
    let committed = drag(&mut chain, 100.0, &[101.0], 1_000.0);
    assert_eq!(committed, Some(true));
    assert_eq!(chain.theme(), Theme::Light);
}

#[test]
fn short_pull_does_not_flip() {
    let mut chain = PullChain::default();
    let committed = drag(&mut chain, 100.0, &[100.5, 100.9], 1_000.0);
    assert_eq!(committed, Some(false));
    assert_eq!(chain.theme(), Theme::Dark);
}

#[test]
fn pull_back_up_before_release_does_not_flip() {
    let mut chain = PullChain::default();
    let committed = drag(&mut chain, 100.0, &[108.0, 99.0], 1_000.0);
    assert_eq!(committed, Some(false));
    assert_eq!(chain.theme(), Theme::Dark);
}

#[test]
fn attempts_inside_cooldown_are_ignored() {
    let mut chain = PullChain::default();
    assert_eq!(drag(&mut chain, 0.0, &[8.0], 1_000.0), Some(true));
    assert_eq!(drag(&mut chain, 0.0, &[8.0], 1_050.0), None);
    assert!(!chain.tap(1_100.0));
    assert_eq!(drag(&mut chain, 0.0, &[8.0], 1_199.0), None);
    assert_eq!(chain.theme(), Theme::Light);

    assert_eq!(drag(&mut chain, 0.0, &[8.0], 1_200.0), Some(true));
    assert_eq!(chain.theme(), Theme::Dark);
}

#[test]
fn release_always_returns_to_resting_length() {
    let mut chain = PullChain::default();
    let cases = [(vec![20.0], true), (vec![0.2], false), (vec![], false)];
    for (index, (moves, expect_commit)) in cases.into_iter().enumerate() {
        let now_ms = 10_000.0 * (index as f64 + 1.0);
        assert!(chain.begin(0.0, REST, now_ms));
        for y in &moves {
            chain.drag_to(*y);
        }
        let release = chain.release(now_ms).expect("session ended");
        assert_eq!(release.resting_len, REST);
        assert_eq!(release.committed, expect_commit);
        assert_eq!(chain.phase(), DragPhase::Idle);
    }
}

#[test]
fn second_begin_while_dragging_is_refused() {
    let mut chain = PullChain::default();
    assert!(chain.begin(0.0, REST, 0.0));
    assert!(!chain.begin(50.0, REST, 0.0));
    let pose = chain.drag_to(4.0).expect("original session kept");
    assert_eq!(pose.len, 44.0);
}

#[test]
fn custom_params_follow_config() {
    let config = ThemeConfig {
        max_pull_px: 20.0,
        commit_pull_px: 10.0,
        ..ThemeConfig::default()
    };
    let mut chain = PullChain::new(PullChainParams::from(&config));
    assert!(chain.begin(0.0, REST, 0.0));
    let pose = chain.drag_to(5.0).expect("dragging");
    assert_eq!(pose.progress, 0.25);
    let release = chain.release(0.0).expect("released");
    assert!(!release.committed);
}
