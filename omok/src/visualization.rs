use crate::Board;

/// Draws the board as text, with 1-based column labels on top and 1-based
/// row labels on the left.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    let mut result = String::from("    ");
    for x in 1..=size {
        result += &format!("{:>3}", x);
    }
    result += "\n    ╭";
    for _ in 0..size {
        result += "───";
    }
    result += "─╮";

    for (idx, intersection) in board.iter().enumerate() {
        if idx % size == 0 {
            result += &format!("\n{:>3} │", intersection.y() + 1);
        }
        let symbol = intersection.owner().map_or('·', |stone| stone.symbol());
        result += &format!("  {}", symbol);
        if idx % size == size - 1 {
            result += " │";
        }
    }

    result += "\n    ╰";
    for _ in 0..size {
        result += "───";
    }
    result += "─╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stone;

    #[test]
    fn draws_stones_in_place() {
        let mut board = Board::new(3).unwrap();
        board.place_stone(0, 0, Stone::Black).unwrap();
        board.place_stone(2, 1, Stone::White).unwrap();
        let text = visualize_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "      1  2  3");
        assert_eq!(lines[2], "  1 │  ●  ·  · │");
        assert_eq!(lines[3], "  2 │  ·  ·  ○ │");
        assert_eq!(lines[4], "  3 │  ·  ·  · │");
    }
}
