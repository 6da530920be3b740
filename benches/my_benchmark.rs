use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use incremental_astar::prelude::*;
use log::{info, warn};
use nanorand::{Rng, WyRand};

#[derive(Clone)]
struct Map {
	surface: Rect,
	obstacles: ObstacleSet,
}

impl Map {
	pub fn new(width: u32, height: u32) -> Self {
		Map {
			surface: Rect::new(Cell::new(0, 0), width, height),
			obstacles: ObstacleSet::new(),
		}
	}

	/// Roughly one in five Cells is blocked
	pub fn new_random(width: u32, height: u32) -> Self {
		let mut map = Map::new(width, height);
		let mut rng = WyRand::new_seed(4);
		for cell in map.surface.cells() {
			if rng.generate_range(0_u32..5) == 0 {
				map.obstacles.mark_blocked(cell);
			}
		}
		map
	}

	fn search(&self, start: (i32, i32), goal: (i32, i32), config: SearchConfig) -> Search<Rect> {
		let mut search = Search::with_config(self.surface, config);
		*search.obstacles_mut() = self.obstacles.clone();
		search.paint(start.into(), Brush::Start);
		search.paint(goal.into(), Brush::Goal);
		search
	}
}

#[allow(unused)]
// Setup logging output
fn init() {
	let env = Env::default()
		.filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to log every single step.
		.write_style_or("MY_LOG_STYLE", "always");

	let _ = env_logger::Builder::from_env(env).try_init();
}

fn bench_run(c: &mut Criterion) {
	let mut group = c.benchmark_group("Run Search");

	// Log to stdout
	init();

	for map_size in [32, 128] {
		let uniform = Map::new(map_size, map_size);
		let random = Map::new_random(map_size, map_size);
		let corner = map_size as i32 - 1;

		for (name, map) in [("Uniform", &uniform), ("Random", &random)] {
			for (heuristic, config) in [
				("Manhattan", SearchConfig::default()),
				("Octile", SearchConfig::OPTIMAL),
			] {
				let id = format!(
					"Run to completion, {} Map, {}, Map Size: ({}, {})",
					name, heuristic, map_size, map_size
				);
				group.bench_function(&id, |b| {
					b.iter(|| {
						let mut search = map.search((0, 0), (corner, corner), config);
						search.run()
					})
				});
			}
		}
	}

	// For large maps, use a smaller sample size so they don't take 30+s per run.
	group.sample_size(10);

	let map = Map::new_random(512, 512);
	match map.search((40, 90), (400, 300), SearchConfig::DIJKSTRA).run() {
		Ok(StepOutcome::Solved(path)) => info!("Large Random Map: {}", path),
		_ => warn!("Large Random Map has no Path, the benchmark measures an exhaustive search"),
	}
	let id = "Run to completion, Large Random Map, Dijkstra, Map Size: (512, 512)";
	group.bench_function(id, |b| {
		b.iter(|| {
			let mut search = map.search((40, 90), (400, 300), SearchConfig::DIJKSTRA);
			search.run()
		})
	});
}

fn bench_steps(c: &mut Criterion) {
	let mut group = c.benchmark_group("Single Steps");

	let map = Map::new_random(128, 128);
	let id = "Step to completion, Random Map, Map Size: (128, 128)";
	group.bench_function(id, |b| {
		b.iter(|| {
			let mut search = map.search((0, 0), (127, 127), SearchConfig::default());
			loop {
				let outcome = search.step().unwrap();
				if outcome.is_finished() {
					break outcome;
				}
			}
		})
	});

	let id = "Step to completion with Snapshots, Random Map, Map Size: (128, 128)";
	group.bench_function(id, |b| {
		b.iter(|| {
			let mut search = map.search((0, 0), (127, 127), SearchConfig::default());
			let mut snapshots = 0;
			while !search.step().unwrap().is_finished() {
				snapshots += search.snapshot().map_or(0, |s| s.frontier.len());
			}
			snapshots
		})
	});
}

fn bench_erase(c: &mut Criterion) {
	let mut group = c.benchmark_group("Erase and Rerun");

	let map = Map::new_random(128, 128);
	let mut search = map.search((0, 0), (127, 127), SearchConfig::OPTIMAL);
	let _ = search.run();

	// Put a wall across the map and search again
	let id = "Erase, block and rerun, Random Map, Map Size: (128, 128)";
	group.bench_function(id, |b| {
		b.iter(|| {
			let report = search.erase();
			for x in 0..120 {
				search.paint(Cell::new(x, 64), Brush::Blocked);
			}
			let outcome = search.run();
			for x in 0..120 {
				search.paint(Cell::new(x, 64), Brush::Standard);
			}
			(report, outcome)
		})
	});
}

criterion_group!(benches, bench_run, bench_steps, bench_erase);
criterion_main!(benches);
