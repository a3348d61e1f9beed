use prime_catalog::algorithms::{LucasLehmer, LucasLehmerParams};
use prime_catalog::detail::primes_up_to;
use prime_catalog::Algorithm;

/// Find all mersenne primes 2^p-1 where p < 128 with the Lucas-Lehmer test, return a list of p
fn list_mersenne() -> Vec<u64> {
    primes_up_to(128)
        .into_iter()
        .filter(|&p| LucasLehmer.run(&LucasLehmerParams { p: p as i64 }).result)
        .collect()
}

fn main() {
    println!("Mersenne primes under 2^128:");
    for p in list_mersenne() {
        println!("2^{} - 1", p);
    }
}
