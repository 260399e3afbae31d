use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use lanescope_graphics::{BallPosition, LaneSpec, Layer, ScaleFactors};

use super::LaneSheet;

const COMMENT_STR: &str = "//";

enum Tag {
    Scale,
    Layers,
    Shots,
    Output,
}

impl TryFrom<&str> for Tag {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "SCALE" => Ok(Tag::Scale),
            "LAYERS" => Ok(Tag::Layers),
            "SHOTS" => Ok(Tag::Shots),
            "OUTPUT" => Ok(Tag::Output),
            _ => Err(anyhow!("Invalid string for Tag conversion: {}", s)),
        }
    }
}

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

fn parse_switch(val: &str) -> Result<bool> {
    match val {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(anyhow!("Unrecognized layer switch `{}`, expected `on` or `off`", val)),
    }
}

fn parse_scale(subs: &[&str]) -> Result<ScaleFactors> {
    let [length, width] = subs else {
        bail!("Expected `<length_scale> <width_scale>`, got {} value(s)", subs.len());
    };

    Ok(ScaleFactors::new(length.parse()?, width.parse()?)?)
}

fn parse_position(board: &str, distance: &str) -> Result<BallPosition> {
    let board_count = LaneSpec::REGULATION.board_count;
    let board = board.parse::<u32>()?;
    if !(1..=board_count).contains(&board) {
        bail!("Board {} is off the lane, expected 1..={}", board, board_count);
    }

    let distance = distance.parse::<f64>()?;
    if !(distance.is_finite() && distance >= 0.0) {
        bail!("Distance {} must be a finite number of mm past the foul line", distance);
    }

    Ok(BallPosition::new(board, distance))
}

/// `<board> <distance>` pairs, any number of them.
fn parse_shot(subs: &[&str]) -> Result<Vec<BallPosition>> {
    if subs.len() % 2 != 0 {
        bail!("Shot has a board without a distance");
    }

    subs.chunks(2)
        .map(|pair| parse_position(pair[0], pair[1]))
        .collect()
}

fn parse_data_line(sheet: &mut LaneSheet, tag: &Tag, subs: &[&str]) -> Result<()> {
    match tag {
        Tag::Scale => sheet.scale = parse_scale(subs)?,
        Tag::Layers => {
            let [name, switch] = subs else {
                bail!("Expected `<layer> <on|off>`");
            };
            let layer = name.parse::<Layer>()?;
            if layer == Layer::Trace {
                bail!("Traces are drawn for every shot and cannot be switched");
            }
            sheet.layers = sheet.layers.with(layer, parse_switch(switch)?);
        }
        Tag::Shots => sheet.shots.push(parse_shot(subs)?),
        Tag::Output => sheet.output_path = Some(PathBuf::from(subs.join(" "))),
    }

    Ok(())
}

/// Parses lane sheet text. Line numbers in errors are 1-based.
pub fn parse_sheet<I, L>(lines: I) -> Result<LaneSheet>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut sheet = LaneSheet::default();
    let mut current_tag = None::<Tag>;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with(COMMENT_STR) {
            continue;
        }

        if let Ok(tag) = Tag::try_from(line) {
            current_tag = Some(tag);
            continue;
        }

        let line_number = index + 1;
        let tag = current_tag
            .as_ref()
            .ok_or_else(|| anyhow!("Line {}: data before any section tag", line_number))?;
        let subs = line.split_whitespace().collect::<Vec<_>>();
        parse_data_line(&mut sheet, tag, &subs)
            .with_context(|| format!("Line {}: `{}`", line_number, line))?;
    }

    log::debug!(
        "Parsed lane sheet: {} shot(s), layers {:?}",
        sheet.shots.len(),
        sheet.layers
    );

    Ok(sheet)
}

pub fn parse_sheet_file(file_path: impl AsRef<Path>) -> Result<LaneSheet> {
    let file_path = file_path.as_ref();
    let lines = read_lines(file_path)
        .with_context(|| format!("Failed to open lane sheet {}", file_path.display()))?;
    let lines = lines.collect::<io::Result<Vec<_>>>()?;

    parse_sheet(lines).with_context(|| format!("Invalid lane sheet {}", file_path.display()))
}

#[cfg(test)]
mod tests {
    use lanescope_graphics::LayerConfig;

    use super::*;

    #[test]
    fn parses_every_section() {
        let text = "
            // Practice session
            SCALE
            0.1 0.5

            LAYERS
            dots off
            range_finders off

            SHOTS
            24 1829 20 4572
            17 1829
            OUTPUT
            out/practice lane.svg
        ";
        let sheet = parse_sheet(text.lines()).unwrap();

        assert_eq!(sheet.scale, ScaleFactors::new(0.1, 0.5).unwrap());
        assert_eq!(
            sheet.layers,
            LayerConfig::all()
                .with(Layer::Dots, false)
                .with(Layer::RangeFinders, false)
        );
        assert_eq!(
            sheet.shots,
            vec![
                vec![BallPosition::new(24, 1829.0), BallPosition::new(20, 4572.0)],
                vec![BallPosition::new(17, 1829.0)],
            ]
        );
        assert_eq!(
            sheet.output_path,
            Some(PathBuf::from("out/practice lane.svg"))
        );
    }

    #[test]
    fn empty_sheet_uses_defaults() {
        let sheet = parse_sheet(["", "// nothing here"]).unwrap();
        assert_eq!(sheet, LaneSheet::default());
        assert_eq!(sheet.output_path_or_default(), PathBuf::from("lane.svg"));
    }

    #[test]
    fn data_before_tag_is_an_error() {
        let err = parse_sheet(["24 1829 20 4572"]).unwrap_err();
        assert!(err.to_string().contains("Line 1"));
    }

    #[test]
    fn errors_name_the_offending_line() {
        let err = parse_sheet(["SHOTS", "24 1829", "20 far"]).unwrap_err();
        assert!(err.to_string().starts_with("Line 3"), "{err:#}");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_sheet(["SCALE", "0 0.25"]).is_err());
        assert!(parse_sheet(["SCALE", "0.25"]).is_err());
        assert!(parse_sheet(["LAYERS", "pins maybe"]).is_err());
        assert!(parse_sheet(["LAYERS", "trace off"]).is_err());
        assert!(parse_sheet(["LAYERS", "gutters on"]).is_err());
        assert!(parse_sheet(["SHOTS", "24 1829 20"]).is_err());
        assert!(parse_sheet(["SHOTS", "-3 1829 20 4572"]).is_err());
    }

    #[test]
    fn rejects_positions_off_the_lane() {
        for shot in ["0 1829 20 4572", "24 1829 40 4572", "24 -5 20 4572", "24 1829 20 inf"] {
            let err = parse_sheet(["SHOTS", shot]).unwrap_err();
            assert!(err.to_string().starts_with("Line 2"), "{err:#}");
        }

        let sheet = parse_sheet(["SHOTS", "1 0 39 18288"]).unwrap();
        assert_eq!(
            sheet.shots,
            vec![vec![BallPosition::new(1, 0.0), BallPosition::new(39, 18288.0)]]
        );
    }

    #[test]
    fn reads_sheet_files() {
        let path = std::env::temp_dir().join(format!("lanescope-sheet-{}.lane", std::process::id()));
        std::fs::write(&path, "LAYERS\npins off\n").unwrap();
        let sheet = parse_sheet_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!sheet.layers.pins);
        assert!(parse_sheet_file("does/not/exist.lane").is_err());
    }
}
