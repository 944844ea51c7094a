use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_keyfall::core::{GameConfig, Grid, SimpleRng};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn grid_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let config = GameConfig::default();
    let mut grid = Grid::new(&config, SimpleRng::new(1)).unwrap();

    // Warm-up: reach steady state with misses, hits and full-pool ticks.
    for _ in 0..60 {
        let _ = grid.tick();
        for &label in config.alphabet.iter() {
            let _ = grid.check_goal(label);
        }
    }
    for _ in 0..grid.max_active_tokens() {
        let _ = grid.spawn_one();
    }
    let _ = grid.tick();
    grid.compose();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = grid.tick();
            grid.compose();
        }

        for _ in 0..50 {
            for &label in config.alphabet.iter() {
                let _ = grid.check_goal(label);
            }
            let _ = grid.tick();
            let _ = grid.advance_and_cull();
        }
    });

    assert!(allocs == 0);
}
