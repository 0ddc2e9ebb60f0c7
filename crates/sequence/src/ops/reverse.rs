use crate::array_like::ArrayLike;

pub fn reverse<A: ArrayLike>(target: &mut A) -> &mut A {
    let length = target.length();
    for lower in 0..length / 2 {
        let upper = length - 1 - lower;
        let lower_slot = target.take(lower);
        let upper_slot = target.take(upper);
        target.put(lower, upper_slot);
        target.put(upper, lower_slot);
    }
    target
}
