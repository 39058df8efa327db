use crate::math::Tile;
use crate::planting::{
    Planting, PlantingDomain, Spoilage, DECAY_STEPS, MATURE_STAGE, RIPENESS_STEPS, SPOILED_STAGE,
};
use log::debug;
use std::collections::BTreeSet;

/// Stage of a healthy crop after `elapsed` seconds with `effective` seconds
/// per growth step.
pub fn growth_stage(elapsed: f64, effective: f64) -> u8 {
    let effective = effective.max(f64::EPSILON);
    let elapsed = elapsed.max(0.0);
    let raw = (elapsed / effective).floor() + 1.0;
    if raw < MATURE_STAGE as f64 {
        return raw as u8;
    }
    let excess = elapsed - (MATURE_STAGE - 1) as f64 * effective;
    if excess < RIPENESS_STEPS * effective {
        MATURE_STAGE
    } else {
        SPOILED_STAGE
    }
}

impl PlantingDomain {
    pub fn update(&mut self, now: f64, irrigated: &BTreeSet<Tile>) -> Vec<Planting> {
        let mut events = vec![];
        let mut rotten_crops = vec![];
        for (place, crop) in self.crops.iter_mut() {
            let elapsed = now - crop.planted_at;
            if !crop.spoiled && !irrigated.contains(place) {
                crop.spoiled = true;
                crop.stage = SPOILED_STAGE;
                events.push(Planting::CropSpoiled {
                    place: *place,
                    cause: Spoilage::Drought,
                });
                continue;
            }
            let effective = crop.effective_growth();
            if !crop.spoiled {
                let stage = growth_stage(elapsed, effective);
                if stage != crop.stage {
                    crop.stage = stage;
                    events.push(Planting::CropGrown {
                        place: *place,
                        stage,
                    });
                }
                if stage == SPOILED_STAGE {
                    crop.spoiled = true;
                    events.push(Planting::CropSpoiled {
                        place: *place,
                        cause: Spoilage::Overripe,
                    });
                }
            }
            if crop.stage == SPOILED_STAGE && elapsed > DECAY_STEPS * effective {
                rotten_crops.push(*place);
            }
        }
        for place in rotten_crops {
            debug!("Crop at {:?} rotted away", place);
            self.crops.remove(&place);
            events.push(Planting::CropRemoved { place });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegetative_stages() {
        assert_eq!(growth_stage(0.0, 5.0), 1);
        assert_eq!(growth_stage(4.99, 5.0), 1);
        assert_eq!(growth_stage(5.0, 5.0), 2);
        assert_eq!(growth_stage(24.9, 5.0), 5);
    }

    #[test]
    fn test_mature_window_is_three_steps() {
        assert_eq!(growth_stage(25.0, 5.0), 6);
        assert_eq!(growth_stage(39.9, 5.0), 6);
        assert_eq!(growth_stage(40.0, 5.0), 7);
    }

    #[test]
    fn test_zero_growth_time_does_not_divide_by_zero() {
        assert_eq!(growth_stage(1.0, 0.0), 7);
    }
}
