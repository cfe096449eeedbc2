use std::io::{self, Write};

/// Copies `src[start..end]` to the front of `dst`. `dst` must hold at least
/// `end - start` elements.
pub fn array_copy(src: &[i32], dst: &mut [i32], start: usize, end: usize) {
    dst[..end - start].copy_from_slice(&src[start..end]);
}

pub fn render(arr: &[i32]) -> String {
    arr.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" ")
}

pub fn display_to<W: Write>(out: &mut W, arr: &[i32]) -> io::Result<()> {
    writeln!(out, "{}", render(arr))
}

/// Prints `arr` space separated on its own line.
pub fn display(arr: &[i32]) -> io::Result<()> {
    display_to(&mut io::stdout().lock(), arr)
}

pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_copy() {
        let src = [10, 20, 30, 40, 50];
        let mut dst = [0; 5];
        array_copy(&src, &mut dst, 1, 4);
        assert_eq!(dst[..3], [20, 30, 40]);
        assert_eq!(dst[3..], [0, 0]);
    }

    #[test]
    fn test_array_copy_empty_range() {
        let mut dst: [i32; 0] = [];
        array_copy(&[1, 2, 3], &mut dst, 2, 2);
    }

    #[test]
    #[should_panic]
    fn test_array_copy_short_dst() {
        let mut dst = [0; 2];
        array_copy(&[1, 2, 3, 4], &mut dst, 0, 4);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[1, -2, 3]), "1 -2 3");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_display_to() {
        let mut out = Vec::new();
        display_to(&mut out, &[4, 1, 3, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4 1 3 2\n");
    }

    #[test]
    fn test_display() {
        display(&[4, 1, 3, 2]).unwrap();
        display(&[]).unwrap();
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
