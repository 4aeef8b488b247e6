use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook};
use scorebook_core::{CellValue, ValidationError};
use scorebook_sheet::parse_workbook_bytes;

/// Test cell, written with the closest native Excel type.
#[derive(Clone, Copy)]
enum Cell {
    Text(&'static str),
    Num(f64),
    Date(u16, u8, u8),
    /// Date and time, `yyyy-mm-dd hh:mm`.
    Stamp(u16, u8, u8, u16, u8),
    /// Time of day, `hh:mm:ss`.
    Clock(u16, u8, u8),
    /// Elapsed time, `[h]:mm:ss`.
    Elapsed(u16, u8, u8),
    /// Formula with its cached result.
    Formula(&'static str, &'static str),
    Blank,
}

use Cell::{Blank, Date, Num, Text};

type SheetData = (&'static str, Vec<Vec<Cell>>);

fn build(sheets: &[SheetData]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let stamp_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");
    let clock_format = Format::new().set_num_format("hh:mm:ss");
    let elapsed_format = Format::new().set_num_format("[h]:mm:ss");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match *cell {
                    Text(s) => {
                        worksheet.write_string(r, c, s).unwrap();
                    }
                    Num(n) => {
                        worksheet.write_number(r, c, n).unwrap();
                    }
                    Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    Cell::Stamp(y, m, d, hour, min) => {
                        let stamp = ExcelDateTime::from_ymd(y, m, d)
                            .unwrap()
                            .and_hms(hour, min, 0)
                            .unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &stamp, &stamp_format)
                            .unwrap();
                    }
                    Cell::Clock(hour, min, sec) => {
                        let time = ExcelDateTime::from_hms(hour, min, sec).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &time, &clock_format)
                            .unwrap();
                    }
                    Cell::Elapsed(hour, min, sec) => {
                        let time = ExcelDateTime::from_hms(hour, min, sec).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &time, &elapsed_format)
                            .unwrap();
                    }
                    Cell::Formula(source, result) => {
                        worksheet
                            .write_formula(r, c, Formula::new(source).set_result(result))
                            .unwrap();
                    }
                    Blank => {}
                }
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

fn matches_sheet() -> SheetData {
    (
        "Matches",
        vec![
            vec![
                Text("MatchID"),
                Text("Opponent"),
                Text("Team Runs"),
                Text("Team Wickets Lost"),
                Text("Opponent Runs"),
                Text("Opponent Wickets Lost"),
                Text("Date"),
                Text("Venue"),
            ],
            vec![
                Num(1.0),
                Text("  Royal Strikers "),
                Num(152.0),
                Num(6.0),
                Num(148.0),
                Num(9.0),
                Date(2024, 5, 1),
                Text("Chennai"),
            ],
        ],
    )
}

fn players_sheet() -> SheetData {
    (
        "Players",
        vec![
            vec![Text("PlayerID"), Text("Player Name"), Text("Role")],
            vec![Text("P1"), Text("Arun Kumar"), Text("N/A")],
            vec![Blank, Blank, Blank],
        ],
    )
}

fn batting_sheet(match_id: f64) -> SheetData {
    (
        "Batting",
        vec![
            vec![
                Text("MatchID"),
                Text("PlayerID"),
                Text("Runs"),
                Text("Balls"),
                Text("Strike Rate"),
            ],
            vec![Num(match_id), Text("P1"), Num(45.0), Num(30.0), Num(150.0)],
        ],
    )
}

fn bowling_sheet() -> SheetData {
    (
        "Bowling",
        vec![
            vec![
                Text("MatchID"),
                Text("PlayerID"),
                Text("Overs"),
                Text("Runs"),
                Text("Wickets"),
                Text("Dots"),
                Text("Fours"),
                Text("Sixes"),
                Text("Economy"),
            ],
            vec![
                Num(1.0),
                Text("P1"),
                Num(3.4),
                Num(27.0),
                Num(2.0),
                Num(9.0),
                Num(2.0),
                Num(1.0),
                Cell::Formula("=D2/C2", "7.941176"),
            ],
        ],
    )
}

fn fielding_sheet() -> SheetData {
    (
        "Fielding",
        vec![
            vec![Text("MatchID"), Text("PlayerID"), Text("Catches")],
            vec![Num(1.0), Text("P1"), Num(2.0)],
        ],
    )
}

fn career_sheet(player_id: &'static str) -> SheetData {
    (
        "Player_Career_Stats",
        vec![
            vec![Text("PlayerID"), Text("Player Name"), Text("Matches"), Text("Average")],
            vec![Text(player_id), Text("Arun Kumar"), Num(1.0), Num(45.0)],
        ],
    )
}

fn team_sheet() -> SheetData {
    (
        "Team_Stats",
        vec![
            vec![Text("Matches"), Text("Won"), Text("Lost"), Text("Net RR")],
            vec![Num(1.0), Num(1.0), Num(0.0), Num(0.2)],
        ],
    )
}

fn valid_sheets() -> Vec<SheetData> {
    vec![
        matches_sheet(),
        players_sheet(),
        batting_sheet(1.0),
        bowling_sheet(),
        fielding_sheet(),
        career_sheet("P1"),
        team_sheet(),
    ]
}

#[test]
fn test_parse_valid_workbook() {
    let dataset = parse_workbook_bytes(&build(&valid_sheets())).unwrap();

    assert_eq!(dataset.matches.len(), 1);
    assert_eq!(dataset.players.len(), 1);
    assert_eq!(dataset.batting.len(), 1);
    assert_eq!(dataset.bowling.len(), 1);
    assert_eq!(dataset.fielding.len(), 1);
    assert_eq!(dataset.player_career_stats.len(), 1);
    assert_eq!(dataset.team_stats.len(), 1);
    assert!(dataset.meta.is_none());

    let game = &dataset.matches[0];
    assert_eq!(game["MatchID"], CellValue::Int(1));
    assert_eq!(game["Opponent"], CellValue::from("Royal Strikers"));
    assert_eq!(game["Date"], CellValue::from("2024-05-01"));

    assert_eq!(dataset.players[0]["Role"], CellValue::Null);
    assert_eq!(dataset.team_stats[0]["Net RR"], CellValue::Float(0.2));
}

#[test]
fn test_bowling_columns_renamed() {
    let dataset = parse_workbook_bytes(&build(&valid_sheets())).unwrap();
    let spell = &dataset.bowling[0];

    let keys: Vec<&str> = spell.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "MatchID",
            "PlayerID",
            "Overs",
            "Bowl Runs",
            "Wkts",
            "Dot Balls",
            "Fours Conceded",
            "Sixes Conceded",
            "Economy",
        ]
    );
    assert_eq!(spell["Overs"], CellValue::Float(3.4));
    assert_eq!(spell["Bowl Runs"], CellValue::Int(27));
}

#[test]
fn test_formula_cells_use_cached_value() {
    let dataset = parse_workbook_bytes(&build(&valid_sheets())).unwrap();
    let economy = dataset.bowling[0]["Economy"].as_number().unwrap();
    assert!((economy - 7.94).abs() < 0.01, "{economy}");
}

#[test]
fn test_parse_is_deterministic() {
    let bytes = build(&valid_sheets());
    let first = serde_json::to_string_pretty(&parse_workbook_bytes(&bytes).unwrap()).unwrap();
    let second = serde_json::to_string_pretty(&parse_workbook_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sheet_order_in_workbook_does_not_matter() {
    let mut sheets = valid_sheets();
    sheets.reverse();
    sheets.push(("Notes", vec![vec![Text("anything")]]));

    let dataset = parse_workbook_bytes(&build(&sheets)).unwrap();
    assert_eq!(dataset.matches.len(), 1);
}

#[test]
fn test_missing_sheet() {
    let mut sheets = valid_sheets();
    sheets.retain(|(name, _)| *name != "Team_Stats");

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Workbook is missing required sheet 'Team_Stats'."
    );
}

#[test]
fn test_first_missing_sheet_in_declared_order() {
    let sheets = vec![matches_sheet(), team_sheet()];

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(err, ValidationError::missing_sheet("Players"));
}

#[test]
fn test_missing_required_column() {
    let mut sheets = valid_sheets();
    sheets[1] = (
        "Players",
        vec![
            vec![Text("PlayerID"), Text("Name")],
            vec![Text("P1"), Text("Arun Kumar")],
        ],
    );

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sheet 'Players' is missing required columns: Player Name."
    );
}

#[test]
fn test_batting_references_unknown_match() {
    let mut sheets = valid_sheets();
    sheets[2] = batting_sheet(99.0);

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownMatch {
            section: "Batting".to_string(),
            value: "99".to_string(),
        }
    );
}

#[test]
fn test_player_without_career_stats() {
    let mut sheets = valid_sheets();
    sheets[5] = career_sheet("P2");

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Player_Career_Stats sheet is missing records for: P1"
    );
}

#[test]
fn test_empty_fact_sheets_are_allowed() {
    let mut sheets = valid_sheets();
    sheets[2] = ("Batting", Vec::new());
    sheets[3] = ("Bowling", Vec::new());
    sheets[4] = ("Fielding", Vec::new());

    let dataset = parse_workbook_bytes(&build(&sheets)).unwrap();
    assert!(dataset.batting.is_empty());
    assert!(dataset.bowling.is_empty());
    assert!(dataset.fielding.is_empty());
}

#[test]
fn test_date_time_cells_through_workbook() {
    let mut sheets = valid_sheets();
    let (_, rows) = &mut sheets[0];
    rows[0].extend([Text("Start"), Text("Toss"), Text("Duration")]);
    rows[1].extend([
        Cell::Stamp(2024, 5, 1, 14, 30),
        Cell::Clock(9, 15, 5),
        Cell::Elapsed(27, 15, 0),
    ]);

    let dataset = parse_workbook_bytes(&build(&sheets)).unwrap();
    let game = &dataset.matches[0];
    assert_eq!(game["Start"], CellValue::from("2024-05-01T14:30:00"));
    assert_eq!(game["Toss"], CellValue::from("09:15:05"));
    assert_eq!(game["Duration"], CellValue::from("27:15:00"));
}

#[test]
fn test_headers_come_from_first_row() {
    let mut sheets = valid_sheets();
    let (_, rows) = &mut sheets[1];
    rows.insert(0, Vec::new());

    let err = parse_workbook_bytes(&build(&sheets)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sheet 'Players' is missing required columns: PlayerID, Player Name."
    );
}

#[test]
fn test_leading_blank_column_is_ignored() {
    let mut sheets = valid_sheets();
    let (_, rows) = &mut sheets[1];
    for row in rows.iter_mut() {
        row.insert(0, Blank);
    }

    let dataset = parse_workbook_bytes(&build(&sheets)).unwrap();
    let keys: Vec<&str> = dataset.players[0].keys().map(String::as_str).collect();
    assert_eq!(keys, ["PlayerID", "Player Name", "Role"]);
}
