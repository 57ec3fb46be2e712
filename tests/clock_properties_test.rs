use berlin_clock::{encode, FiveRowDisplay, Lamp, LampRow, TimeOfDay};

fn display(hours: i32, minutes: i32, seconds: i32) -> FiveRowDisplay {
    encode(TimeOfDay::new(hours, minutes, seconds).unwrap())
}

fn lit(row: &LampRow) -> usize {
    row.lit_count()
}

#[test]
fn test_row_lengths_never_change() {
    for hours in 0..=24 {
        for minutes in 0..=59 {
            let d = display(hours, minutes, minutes);
            let lengths: Vec<usize> = d.rows().iter().map(|row| row.len()).collect();
            assert_eq!(lengths, FiveRowDisplay::ROW_LENGTHS);
        }
    }
}

#[test]
fn test_hour_rows_add_up() {
    for hours in 0..=24 {
        let d = display(hours, 0, 0);
        assert_eq!(lit(d.hours_five()), (hours / 5) as usize);
        assert_eq!(lit(d.hours_one()), (hours % 5) as usize);
        assert_eq!(5 * lit(d.hours_five()) + lit(d.hours_one()), hours as usize);
        assert!(d
            .hours_five()
            .lamps()
            .iter()
            .chain(d.hours_one().lamps())
            .all(|&lamp| lamp != Lamp::Yellow));
    }
}

#[test]
fn test_minute_rows_add_up() {
    for minutes in 0..=59 {
        let d = display(0, minutes, 0);
        assert_eq!(lit(d.minutes_five()), (minutes / 5) as usize);
        assert_eq!(lit(d.minutes_one()), (minutes % 5) as usize);
        assert_eq!(
            5 * lit(d.minutes_five()) + lit(d.minutes_one()),
            minutes as usize
        );
        assert!(d.minutes_one().lamps().iter().all(|&lamp| lamp != Lamp::Red));
    }
}

#[test]
fn test_lit_cells_are_contiguous_from_the_start() {
    for minutes in 0..=59 {
        let d = display(0, minutes, 0);
        for row in d.rows() {
            let n = row.lit_count();
            assert!(row.lamps()[..n].iter().all(|lamp| lamp.is_lit()));
            assert!(row.lamps()[n..].iter().all(|&lamp| lamp == Lamp::Off));
        }
    }
}

#[test]
fn test_seconds_lamp_tracks_parity() {
    for seconds in 0..=59 {
        let expected = if seconds % 2 == 0 { Lamp::Yellow } else { Lamp::Off };
        assert_eq!(display(12, 0, seconds).seconds().lamps(), [expected]);
    }
}

#[test]
fn test_quarter_hour_cells_are_red_only_when_lit() {
    for minutes in 0..=59 {
        let row = display(0, minutes, 0).minutes_five().clone();
        for (i, &lamp) in row.lamps().iter().enumerate() {
            let is_lit = i < (minutes / 5) as usize;
            let quarter = matches!(i, 2 | 5 | 8);
            let expected = match (is_lit, quarter) {
                (false, _) => Lamp::Off,
                (true, true) => Lamp::Red,
                (true, false) => Lamp::Yellow,
            };
            assert_eq!(lamp, expected, "minute {} cell {}", minutes, i);
        }
    }
}

#[test]
fn test_encode_is_pure() {
    let time = TimeOfDay::new(17, 42, 8).unwrap();
    assert_eq!(encode(time), encode(time));
    assert_eq!(encode(time).to_string(), encode(time).to_string());
}

#[test]
fn test_encode_from_many_threads() {
    let handles: Vec<_> = (0..=24)
        .map(|hours| {
            std::thread::spawn(move || display(hours, 59, 59).to_string())
        })
        .collect();

    for (hours, handle) in handles.into_iter().enumerate() {
        let rendered = handle.join().unwrap();
        assert_eq!(rendered, display(hours as i32, 59, 59).to_string());
    }
}
