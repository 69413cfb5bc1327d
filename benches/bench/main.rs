// third-party imports
use criterion::criterion_main;

const GROUP: &str = "wmatch";
const ND: &str = ":"; // name delimiter

mod compile;
mod strategy;

criterion_main!(compile::benches, strategy::benches);
