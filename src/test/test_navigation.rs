#[cfg(test)]
mod test {
    use CodelChooser::{Left as CcLeft, Right as CcRight};
    use Direction::*;
    use crate::console_interface::parse_program;
    use crate::core::*;

    fn machine_at(point: Point, dp: Direction, cc: CodelChooser) -> MachineState {
        MachineState {
            point,
            dp,
            cc,
            ..MachineState::default()
        }
    }

    #[test]
    fn exit_codel_follows_tie_break_table_for_every_dp_and_cc() {
        let grid = parse_program(
            r#"
ggggg
grrrg
grrrg
grrrg
ggggg
"#,
        )
        .unwrap();
        let center = Point::new(2, 2);

        let expected = [
            (Right, CcLeft, Point::new(4, 1)),
            (Right, CcRight, Point::new(4, 3)),
            (Down, CcLeft, Point::new(1, 4)),
            (Down, CcRight, Point::new(3, 4)),
            (Left, CcLeft, Point::new(0, 3)),
            (Left, CcRight, Point::new(0, 1)),
            (Up, CcLeft, Point::new(3, 0)),
            (Up, CcRight, Point::new(1, 0)),
        ];

        for (dp, cc, next) in expected {
            let candidate = advance(&machine_at(center, dp, cc), &grid).unwrap();
            assert_eq!(candidate.point, next, "dp {:?} cc {:?}", dp, cc);
            assert_eq!(candidate.area, 9);
            assert!(candidate.should_execute);
        }
    }

    #[test]
    fn exit_from_irregular_block_uses_extreme_edge() {
        // the red block's rightmost column is a single codel
        let grid = parse_program(
            r#"
rrgg
rrrg
rrgg
"#,
        )
        .unwrap();
        for cc in [CcLeft, CcRight] {
            let candidate = advance(&machine_at(Point::new(0, 0), Right, cc), &grid).unwrap();
            assert_eq!(candidate.point, Point::new(3, 1));
            assert_eq!(candidate.area, 7);
        }
    }

    #[test]
    fn white_is_crossed_without_executing() {
        let grid = parse_program("r..g").unwrap();
        let candidate = advance(&machine_at(Point::new(0, 0), Right, CcLeft), &grid).unwrap();
        assert_eq!(candidate.point, Point::new(3, 0));
        assert!(!candidate.should_execute);
        assert!(!is_unmovable(&grid, &candidate.point));
    }

    #[test]
    fn sliding_off_the_grid_is_unmovable() {
        let grid = parse_program("r...").unwrap();
        let candidate = advance(&machine_at(Point::new(0, 0), Right, CcLeft), &grid).unwrap();
        assert_eq!(candidate.point, Point::new(4, 0));
        assert!(!candidate.should_execute);
        assert!(is_unmovable(&grid, &candidate.point));
    }

    #[test]
    fn sliding_into_black_is_unmovable() {
        let grid = parse_program("r..#g").unwrap();
        let candidate = advance(&machine_at(Point::new(0, 0), Right, CcLeft), &grid).unwrap();
        assert_eq!(candidate.point, Point::new(3, 0));
        assert!(is_unmovable(&grid, &candidate.point));
    }

    #[test]
    fn navigate_toggles_codel_chooser_first() {
        let grid = parse_program(
            r#"
r#
rg
"#,
        )
        .unwrap();
        let mut state = MachineState::new(Point::new(0, 0));
        let candidate = navigate(&mut state, &grid).unwrap();
        assert_eq!(candidate.point, Point::new(1, 1));
        assert_eq!(candidate.area, 2);
        assert_eq!(state.dp, Right);
        assert_eq!(state.cc, CcRight);
    }

    #[test]
    fn navigate_rotates_direction_after_toggling() {
        let grid = parse_program(
            r#"
r
g
"#,
        )
        .unwrap();
        let mut state = MachineState::new(Point::new(0, 0));
        let candidate = navigate(&mut state, &grid).unwrap();
        assert_eq!(candidate.point, Point::new(0, 1));
        assert_eq!(state.dp, Down);
        assert_eq!(state.cc, CcRight);
    }

    #[test]
    fn navigate_gives_up_after_full_recovery_sequence() {
        let grid = parse_program(
            r#"
###
#r#
###
"#,
        )
        .unwrap();
        let mut state = MachineState::new(Point::new(1, 1));
        assert_eq!(navigate(&mut state, &grid), None);
        // four toggles and four rotations bring dp and cc back where they started
        assert_eq!(state.dp, Right);
        assert_eq!(state.cc, CcLeft);
    }

    #[test]
    fn recovery_sequence_alternates_starting_with_codel_chooser() {
        assert_eq!(RECOVERY_SEQUENCE.len(), 8);
        for (i, recovery) in RECOVERY_SEQUENCE.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Recovery::ToggleCodelChooser
            } else {
                Recovery::RotateDirection
            };
            assert_eq!(*recovery, expected);
        }
    }
}
