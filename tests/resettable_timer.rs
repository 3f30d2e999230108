use float_visibility::timer::{ResettableTimer, TimeoutOutcome};
use float_visibility::FloatError;
use std::sync::{Arc, Mutex};
use std::thread;

use mock_backend::{BrokenDelay, ManualDelay};

fn counting_action(hits: &Arc<Mutex<Vec<u32>>>, id: u32) -> impl FnOnce() -> anyhow::Result<bool> + Send + 'static {
    let hits = hits.clone();
    move || {
        hits.lock().unwrap().push(id);
        Ok(true)
    }
}

#[test]
fn later_call_supersedes_pending_one() {
    let clock = Arc::new(ManualDelay::default());
    let timer = ResettableTimer::new(clock.clone());
    let hits = Arc::new(Mutex::new(Vec::new()));

    let first = timer.schedule(100, counting_action(&hits, 1)).unwrap();
    clock.wait_for_sleepers(1);
    let second = timer.schedule(50, counting_action(&hits, 2)).unwrap();
    clock.wait_for_sleepers(2);
    assert_eq!((first.token(), second.token()), (1, 2));

    clock.advance(50);
    assert_eq!(second.join(), TimeoutOutcome::Fired);
    clock.advance(50);
    assert_eq!(first.join(), TimeoutOutcome::Superseded);
    assert_eq!(*hits.lock().unwrap(), vec![2]);
}

#[test]
fn settled_call_is_not_superseded() {
    let clock = Arc::new(ManualDelay::default());
    let timer = ResettableTimer::new(clock.clone());
    let hits = Arc::new(Mutex::new(Vec::new()));

    let first = timer.schedule(100, counting_action(&hits, 1)).unwrap();
    clock.wait_for_sleepers(1);
    clock.advance(150);
    assert_eq!(first.join(), TimeoutOutcome::Fired);

    let second = timer.schedule(100, counting_action(&hits, 2)).unwrap();
    clock.wait_for_sleepers(1);
    clock.advance(150);
    assert_eq!(second.join(), TimeoutOutcome::Fired);
    assert_eq!(*hits.lock().unwrap(), vec![1, 2]);
}

#[test]
fn negative_delay_is_rejected_without_bumping_generation() {
    let timer = ResettableTimer::new(Arc::new(ManualDelay::default()));
    let err = timer.schedule(-1, || Ok(true)).unwrap_err();
    assert!(matches!(err, FloatError::InvalidArgument { delay_ms: -1 }));
    assert_eq!(timer.generation(), 0);
}

#[test]
fn zero_delay_still_runs_on_its_own_thread() {
    let timer = ResettableTimer::new(Arc::new(ManualDelay::default()));
    let caller = thread::current().id();
    let pending = timer
        .schedule(0, move || Ok(thread::current().id() != caller))
        .unwrap();
    assert_eq!(pending.join(), TimeoutOutcome::Fired);
}

#[test]
fn interrupted_delay_abandons_action() {
    let timer = ResettableTimer::new(Arc::new(BrokenDelay));
    let hits = Arc::new(Mutex::new(Vec::new()));
    let pending = timer.schedule(10, counting_action(&hits, 1)).unwrap();
    assert_eq!(pending.join(), TimeoutOutcome::Abandoned);
    assert!(hits.lock().unwrap().is_empty());
}

#[test]
fn failing_action_is_reported_not_raised() {
    let clock = Arc::new(ManualDelay::default());
    let timer = ResettableTimer::new(clock.clone());
    let pending = timer.schedule(0, || anyhow::bail!("compositor gone")).unwrap();
    assert_eq!(pending.join(), TimeoutOutcome::Failed);
}

#[test]
fn suppressed_action_reports_suppressed() {
    let timer = ResettableTimer::new(Arc::new(ManualDelay::default()));
    let pending = timer.schedule(0, || Ok(false)).unwrap();
    assert_eq!(pending.join(), TimeoutOutcome::Suppressed);
}

#[test]
fn concurrent_schedules_get_distinct_tokens_and_one_winner() {
    let clock = Arc::new(ManualDelay::default());
    let timer = Arc::new(ResettableTimer::new(clock.clone()));
    let hits = Arc::new(Mutex::new(Vec::new()));

    let pending: Vec<_> = (0..8)
        .map(|i| {
            let timer = timer.clone();
            let action = counting_action(&hits, i);
            thread::spawn(move || timer.schedule(10, action).unwrap())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    let mut tokens: Vec<u64> = pending.iter().map(|p| p.token()).collect();
    tokens.sort_unstable();
    assert_eq!(tokens, (1..=8).collect::<Vec<u64>>());

    clock.wait_for_sleepers(8);
    clock.advance(10);
    let outcomes: Vec<_> = pending.into_iter().map(|p| (p.token(), p.join())).collect();
    for (token, outcome) in outcomes {
        let expected = if token == 8 {
            TimeoutOutcome::Fired
        } else {
            TimeoutOutcome::Superseded
        };
        assert_eq!(outcome, expected, "token {token}");
    }
    assert_eq!(hits.lock().unwrap().len(), 1);
}
