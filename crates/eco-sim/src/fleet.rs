//! Independent trips run side by side.

use eco_env::EnvironmentProvider;
use eco_route::RoutingProvider;

use crate::{SimResult, TripObserver, TripSimulator, TripSummary};

/// Run every simulator to completion with its own observer.
///
/// `make_observer` is called once per trip.  Results come back in input
/// order with the observer that watched each trip.  Trips share no mutable
/// state, so with the `parallel` feature they run on Rayon's thread pool.
#[cfg(feature = "parallel")]
pub fn run_fleet<E, R, O, F>(sims: Vec<TripSimulator<E, R>>, make_observer: F) -> Vec<(SimResult<TripSummary>, O)>
where
    E: EnvironmentProvider,
    R: RoutingProvider,
    O: TripObserver + Send,
    F: Fn(&TripSimulator<E, R>) -> O + Sync,
{
    use rayon::prelude::*;

    sims.into_par_iter()
        .map(|mut sim| {
            let mut observer = make_observer(&sim);
            let result = sim.run(&mut observer);
            (result, observer)
        })
        .collect()
}

/// Run every simulator to completion with its own observer.
///
/// `make_observer` is called once per trip.  Results come back in input
/// order with the observer that watched each trip.
#[cfg(not(feature = "parallel"))]
pub fn run_fleet<E, R, O, F>(sims: Vec<TripSimulator<E, R>>, make_observer: F) -> Vec<(SimResult<TripSummary>, O)>
where
    E: EnvironmentProvider,
    R: RoutingProvider,
    O: TripObserver + Send,
    F: Fn(&TripSimulator<E, R>) -> O + Sync,
{
    sims.into_iter()
        .map(|mut sim| {
            let mut observer = make_observer(&sim);
            let result = sim.run(&mut observer);
            (result, observer)
        })
        .collect()
}
