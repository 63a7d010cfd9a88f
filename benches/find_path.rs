use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use glam::Vec3;
use grid_astar::prelude::*;
use nanorand::{Rng, WyRand};

#[derive(Clone)]
struct Map {
	walkable: Vec<bool>,
	width: usize,
	depth: usize,
}

impl Map {
	pub fn new(width: usize, depth: usize) -> Self {
		Map {
			walkable: vec![true; width * depth],
			width,
			depth,
		}
	}

	pub fn new_random(width: usize, depth: usize) -> Self {
		let mut rng = WyRand::new_seed(4);
		let walkable = (0..width * depth)
			.map(|_| rng.generate_range(0_u32..10) > 1)
			.collect();
		Map {
			walkable,
			width,
			depth,
		}
	}

	fn is_walkable(&self, x: usize, z: usize) -> bool {
		self.walkable[x + z * self.width]
	}

	fn graph(&self) -> GridGraph<MooreNeighborhood> {
		GridGraph::new(
			GridConfig::with_size(self.width, self.depth),
			|(x, z)| self.is_walkable(x, z),
			MooreNeighborhood::new(self.width, self.depth),
		)
		.unwrap()
	}
}

fn center(x: usize, z: usize) -> Vec3 {
	Vec3::new(x as f32 + 0.5, 0.0, z as f32 + 0.5)
}

#[allow(unused)]
// Setup logging output
fn init() {
	let env = Env::default()
		.filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to enable the search timings.
		.write_style_or("MY_LOG_STYLE", "always");

	let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_create_graph(c: &mut Criterion) {
	let mut group = c.benchmark_group("Create Graph");
	group.sample_size(10);

	init();

	for map_size in [128, 1024] {
		let map = Map::new_random(map_size, map_size);
		let id = format!("Create Graph, Random Map, Map Size: ({}, {})", map_size, map_size);
		group.bench_function(&id, |b| b.iter(|| map.graph()));
	}
}

fn bench_get_path(c: &mut Criterion) {
	let mut group = c.benchmark_group("Get Path");

	// Small maps, where the frontier kinds are close
	for (name, map) in [("Uniform", Map::new(32, 32)), ("Random", Map::new_random(32, 32))] {
		let graph = map.graph();
		for (kind, config) in [
			("Linear Scan", SearchConfig::SMALL_GRID),
			("Binary Heap", SearchConfig::LARGE_GRID),
		] {
			let path_finder = PathFinder::with_config(&graph, config);
			let id = format!("Get Single Path, Small {} Map, Map Size: (32, 32), {}", name, kind);
			group.bench_function(&id, |b| {
				b.iter(|| path_finder.find_path(center(0, 0), center(31, 31)))
			});
		}
	}

	// For large maps, use a smaller sample size so they don't take 30+s per run.
	group.sample_size(10);

	for (name, map) in [
		("Uniform", Map::new(1024, 1024)),
		("Random", Map::new_random(1024, 1024)),
	] {
		let graph = map.graph();
		let path_finder = PathFinder::new(&graph);
		let id = format!("Get Single Path, Large {} Map, Map Size: (1024, 1024)", name);
		group.bench_function(&id, |b| {
			b.iter(|| path_finder.find_path(center(40, 90), center(900, 600)))
		});
	}
}

fn bench_get_many_paths(c: &mut Criterion) {
	let mut group = c.benchmark_group("Get Many Paths");
	group.sample_size(10);

	let map = Map::new_random(256, 256);
	let graph = map.graph();
	let path_finder = PathFinder::new(&graph);

	let mut rng = WyRand::new_seed(9);
	let requests: Vec<(Vec3, Vec3)> = (0..64)
		.map(|_| {
			(
				center(rng.generate_range(0..256), rng.generate_range(0..256)),
				center(rng.generate_range(0..256), rng.generate_range(0..256)),
			)
		})
		.collect();

	group.bench_function("Get 64 Paths, Random Map, Sequential", |b| {
		b.iter(|| path_finder.find_paths(&requests))
	});

	#[cfg(feature = "parallel")]
	group.bench_function("Get 64 Paths, Random Map, Parallel", |b| {
		b.iter(|| path_finder.find_paths_parallel(&requests))
	});
}

criterion_group!(benches, bench_create_graph, bench_get_path, bench_get_many_paths);
criterion_main!(benches);
