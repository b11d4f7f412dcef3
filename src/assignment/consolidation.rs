use tracing::{debug, warn};

use crate::flotilla::{BoatAssignment, Flotilla};
use crate::roster::Crew;
use crate::selection::Selection;

/// Spreads the selected crew round-robin over the selected boats.
///
/// Crew `i` goes to boat `i % boat_count` whenever that leaves every boat
/// within its berth range. Otherwise boats below their minimum are filled
/// first, then boats below their maximum. Rules are ignored; the optimizer
/// deals with them.
pub fn consolidate(selection: Selection) -> Flotilla {
    let Selection {
        event_id,
        boats,
        crews,
        waitlist_boats,
        mut waitlist_crews,
        ..
    } = selection;

    let mut crewed_boats: Vec<BoatAssignment> = boats.into_iter().map(BoatAssignment::new).collect();

    if modulo_fits(&crewed_boats, crews.len()) {
        let count = crewed_boats.len();
        for (i, crew) in crews.into_iter().enumerate() {
            crewed_boats[i % count].crews.push(crew);
        }
    } else {
        fill_by_berths(&mut crewed_boats, crews, &mut waitlist_crews);
    }

    debug!(
        event_id = %event_id,
        boats = crewed_boats.len(),
        "Consolidated starting assignment"
    );

    Flotilla {
        event_id,
        crewed_boats,
        waitlist_boats,
        waitlist_crews,
        settled: None,
    }
}

/// Whether dealing `crew_count` crew strictly in turn keeps every boat
/// within its berth range.
fn modulo_fits(boats: &[BoatAssignment], crew_count: usize) -> bool {
    let count = boats.len();
    count > 0
        && boats.iter().enumerate().all(|(index, assignment)| {
            let dealt = crew_count / count + usize::from(index < crew_count % count);
            (assignment.boat.min_berths..=assignment.boat.max_berths).contains(&dealt)
        })
}

fn fill_by_berths(
    crewed_boats: &mut [BoatAssignment],
    crews: Vec<Crew>,
    waitlist_crews: &mut Vec<Crew>,
) {
    let mut cursor = 0;
    for crew in crews {
        match next_boat(crewed_boats, cursor) {
            Some(index) => {
                crewed_boats[index].crews.push(crew);
                cursor = (index + 1) % crewed_boats.len();
            }
            None => {
                warn!(crew = %crew.key, "No berth left for selected crew, waitlisting");
                waitlist_crews.push(crew);
            }
        }
    }
}

fn next_boat(boats: &[BoatAssignment], cursor: usize) -> Option<usize> {
    let below_min = |a: &BoatAssignment| a.crews.len() < a.boat.min_berths;
    let below_max = |a: &BoatAssignment| a.crews.len() < a.boat.max_berths;

    if boats.iter().any(below_min) {
        cyclic_find(boats, cursor, below_min)
    } else {
        cyclic_find(boats, cursor, below_max)
    }
}

fn cyclic_find(
    boats: &[BoatAssignment],
    cursor: usize,
    accepts: impl Fn(&BoatAssignment) -> bool,
) -> Option<usize> {
    (0..boats.len())
        .map(|offset| (cursor + offset) % boats.len())
        .find(|&index| accepts(&boats[index]))
}
