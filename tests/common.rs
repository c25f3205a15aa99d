/// Collect the characters of `text`
#[allow(dead_code)]
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[allow(dead_code)]
pub fn string(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Assert that `l_to_v` and `v_to_l` are inverse permutations of 0..len
#[allow(dead_code)]
pub fn assert_inverse(l_to_v: &[usize], v_to_l: &[usize]) {
    assert_eq!(l_to_v.len(), v_to_l.len());
    for (visual, &logical) in v_to_l.iter().enumerate() {
        assert_eq!(l_to_v[logical], visual, "visual position {}", visual);
    }
    for (logical, &visual) in l_to_v.iter().enumerate() {
        assert_eq!(v_to_l[visual], logical, "logical position {}", logical);
    }
}
