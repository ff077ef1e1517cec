use crate::core::{CodelChooser, Color, ColorGrid, Direction, GridError, Hue, Lightness, Point};
use crate::models::DebugRenderState;
use bimap::BiMap;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use thiserror::Error;

/// Marks the machine's codel in rendered programs.
pub const POINTER_SYMBOL: char = '@';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("program contains no codels")]
    Empty,
    #[error("unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
    #[error(transparent)]
    InvalidGrid(#[from] GridError),
}

/// One character per color: uppercase light, lowercase normal, digits dark.
pub fn symbol_table() -> BiMap<char, Color> {
    let mut symbols = BiMap::new();
    symbols.insert('#', Color::Black);
    symbols.insert('.', Color::White);

    let levels = [
        (Lightness::Light, ['R', 'Y', 'G', 'C', 'B', 'M']),
        (Lightness::Normal, ['r', 'y', 'g', 'c', 'b', 'm']),
        (Lightness::Dark, ['1', '2', '3', '4', '5', '6']),
    ];
    for (lightness, chars) in levels {
        for (hue, ch) in Hue::ALL.into_iter().zip(chars) {
            symbols.insert(ch, Color::from_components(hue, lightness));
        }
    }
    symbols
}

pub fn parse_program(s: &str) -> Result<ColorGrid, ParseError> {
    let symbols = symbol_table();
    let mut rows: Vec<Vec<Color>> = Vec::new();

    for (line_index, line) in s.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (column, ch) in line.chars().enumerate() {
            let Some(&color) = symbols.get_by_left(&ch) else {
                return Err(ParseError::UnknownSymbol {
                    line: line_index + 1,
                    column: column + 1,
                    symbol: ch,
                });
            };
            row.push(color);
        }
        rows.push(row);
    }

    let max_width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    if max_width == 0 {
        return Err(ParseError::Empty);
    }
    // Pad rows to max width with Black
    for row in rows.iter_mut() {
        row.resize(max_width, Color::Black);
    }

    Ok(ColorGrid::from_rows(rows)?)
}

pub fn render_program_to_string(grid: &ColorGrid) -> String {
    render_symbols(grid, None)
}

/// Like [`render_program_to_string`], with the machine's codel drawn as [`POINTER_SYMBOL`].
pub fn render_machine_to_string(grid: &ColorGrid, point: Point) -> String {
    render_symbols(grid, Some(point))
}

fn render_symbols(grid: &ColorGrid, pointer: Option<Point>) -> String {
    let symbols = symbol_table();
    let mut result = String::new();
    for (y, row) in grid.iter_rows().enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let ch = if Some(pos) == pointer {
                POINTER_SYMBOL
            } else {
                symbols.get_by_right(color).copied().unwrap_or('?')
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_debugger(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &ColorGrid,
    state: &DebugRenderState,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5), Constraint::Length(3)])
            .split(f.area());
        let top = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(rows[0]);

        let program = Paragraph::new(program_lines(grid, state.machine.point))
            .block(Block::default().borders(Borders::ALL).title("Program"))
            .alignment(Alignment::Center);
        f.render_widget(program, top[0]);

        let machine = Paragraph::new(machine_lines(state))
            .block(Block::default().borders(Borders::ALL).title("Machine"))
            .style(Style::default().fg(TermColor::White))
            .wrap(Wrap { trim: false });
        f.render_widget(machine, top[1]);

        let output = Paragraph::new(state.output.as_str())
            .block(Block::default().borders(Borders::ALL).title("Output"))
            .wrap(Wrap { trim: false });
        f.render_widget(output, rows[1]);

        let instructions = if state.halted {
            "Program halted. Press q to quit."
        } else {
            "Controls: n/Space/Right to step, r to run, q to quit"
        };
        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(TermColor::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, rows[2]);
    })?;
    Ok(())
}

fn program_lines(grid: &ColorGrid, pointer: Point) -> Vec<Line<'static>> {
    let symbols = symbol_table();
    grid.iter_rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, color)| {
                    let (r, g, b) = color.rgb();
                    let is_pointer = Point::new(x as i32, y as i32) == pointer;
                    let fg = if *color == Color::Black { TermColor::White } else { TermColor::Black };
                    let mut style = Style::default().bg(TermColor::Rgb(r, g, b)).fg(fg);
                    if is_pointer {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    let ch = if is_pointer {
                        POINTER_SYMBOL
                    } else {
                        symbols.get_by_right(color).copied().unwrap_or('?')
                    };
                    Span::styled(format!("{ch}{ch}"), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn machine_lines(state: &DebugRenderState) -> Vec<Line<'static>> {
    let machine = &state.machine;
    let dp = match machine.dp {
        Direction::Right => "right",
        Direction::Down => "down",
        Direction::Left => "left",
        Direction::Up => "up",
    };
    let cc = match machine.cc {
        CodelChooser::Left => "left",
        CodelChooser::Right => "right",
    };
    let last = match &state.last_step {
        Some(record) => match record.op {
            Some(op) => format!("{} {} -> {}", op, record.from, record.to),
            None => format!("slide {} -> {}", record.from, record.to),
        },
        None => "-".to_string(),
    };

    let mut lines = vec![
        Line::from(format!("Steps: {}", state.steps)),
        Line::from(format!("Point: {}", machine.point)),
        Line::from(format!("DP: {dp}  CC: {cc}")),
        Line::from(format!("Area: {}", machine.area)),
        Line::from(format!("Last: {last}")),
        Line::from(format!("Stack ({}):", machine.stack.len())),
    ];
    // top of the stack first
    lines.extend(
        machine
            .stack
            .as_slice()
            .iter()
            .rev()
            .map(|value| Line::from(format!("  {value}"))),
    );
    lines
}

pub enum ConsoleInput {
    Step,
    RunToEnd,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> anyhow::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') | KeyCode::Right => {
                    ConsoleInput::Step
                }
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::RunToEnd,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
