//! Reading and writing clause lists in the DIMACS CNF format.
//!
//! The reader consumes its source in chunks and runs a byte-level state machine over them, so a
//! clause may be split across chunk (and line) boundaries. Comments are lines starting with `c`,
//! and exactly one `p cnf <variables> <clauses>` header must precede the first clause.
//!
//! The parser is not meant as a DIMACS validator. It should only accept valid files, but the
//! errors it reports are not very detailed.
//!
//! # Example
//! ```
//! use clue_cnf::dimacs::parse_cnf;
//! use clue_cnf::dimacs::write_cnf;
//!
//! let source = "c two clauses\np cnf 3 2\n1 -3 0\n2 3 0\n";
//! let formula = parse_cnf(source.as_bytes()).expect("valid dimacs");
//!
//! assert_eq!(3, formula.num_variables);
//! assert_eq!(2, formula.clauses.len());
//!
//! let mut written = Vec::new();
//! write_cnf(&formula.clauses, formula.num_variables, &mut written).unwrap();
//! assert_eq!("p cnf 3 2\n1 -3 0\n2 3 0\n", String::from_utf8(written).unwrap());
//! ```
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::str::FromStr;

use thiserror::Error;

use crate::Clause;
use crate::ClauseError;
use crate::Literal;

/// The clauses read from a DIMACS source, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CnfFormula {
    pub num_variables: u32,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("failed to read source")]
    Io(#[from] std::io::Error),

    #[error("missing dimacs header")]
    MissingHeader,

    #[error("'{0}' is an invalid header")]
    InvalidHeader(String),

    #[error("multiple dimacs headers found")]
    DuplicateHeader,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("'{0}' is an invalid DIMACS literal")]
    InvalidLiteral(String),

    #[error("literal {literal} exceeds the {num_variables} variables declared in the header")]
    VariableOutOfRange { literal: i32, num_variables: u32 },

    #[error("clause {index} is invalid: {source}")]
    InvalidClause { index: usize, source: ClauseError },

    #[error("the last clause in the source is not terminated with a '0'")]
    UnterminatedClause,

    #[error("expected to parse {expected} clauses, but parsed {parsed}")]
    IncorrectClauseCount { expected: usize, parsed: usize },
}

/// Parse a DIMACS CNF source into its clauses.
pub fn parse_cnf(source: impl Read) -> Result<CnfFormula, DimacsParseError> {
    let mut reader = BufReader::new(source);
    let mut parser = DimacsParser::default();

    loop {
        let num_bytes = {
            let data = reader.fill_buf()?;

            if data.is_empty() {
                return parser.complete();
            }

            parser.parse_chunk(data)?;
            data.len()
        };

        reader.consume(num_bytes);
    }
}

/// Write `clauses` to `sink` as a DIMACS CNF file, preserving their order.
pub fn write_cnf(
    clauses: &[Clause],
    num_variables: u32,
    mut sink: impl Write,
) -> std::io::Result<()> {
    writeln!(sink, "p cnf {num_variables} {}", clauses.len())?;

    for clause in clauses {
        writeln!(sink, "{clause}")?;
    }

    sink.flush()
}

#[derive(Clone, Copy, Debug, Default)]
enum ParseState {
    #[default]
    StartLine,
    Header,
    Comment,
    Literal,
    NegativeLiteral,
    Clause,
    /// Just read a terminating `0`, which must be followed by whitespace or the end of the source.
    Terminator,
}

#[derive(Debug, Default)]
struct DimacsParser {
    header: Option<CnfHeader>,
    buffer: String,
    clause: Vec<Literal>,
    clauses: Vec<Clause>,
    state: ParseState,
}

impl DimacsParser {
    /// Parse the next chunk of bytes. This may start in the middle of parsing a clause or the
    /// header, and may end in such a state as well.
    fn parse_chunk(&mut self, chunk: &[u8]) -> Result<(), DimacsParseError> {
        for &byte in chunk {
            match self.state {
                ParseState::StartLine => match byte {
                    b if b.is_ascii_whitespace() => {}

                    b'p' => {
                        self.state = ParseState::Header;
                        self.buffer.clear();
                        self.buffer.push('p');
                    }

                    b'c' => self.state = ParseState::Comment,

                    b @ b'1'..=b'9' => self.start_literal(b, ParseState::Literal),

                    // An empty clause, or the terminator of a clause spanning several lines.
                    b'0' => self.finish_clause()?,

                    b'-' => self.start_literal(b'-', ParseState::NegativeLiteral),

                    b => return Err(DimacsParseError::UnexpectedCharacter(b as char)),
                },

                ParseState::Header => match byte {
                    b'\n' => {
                        self.init_header()?;
                        self.state = ParseState::StartLine;
                    }

                    b => self.buffer.push(b as char),
                },

                ParseState::Comment => {
                    if byte == b'\n' {
                        self.state = ParseState::StartLine;
                    }
                }

                ParseState::Literal => match byte {
                    b if b.is_ascii_whitespace() => {
                        self.finish_literal()?;
                        if b == b'\n' {
                            self.state = ParseState::StartLine;
                        }
                    }

                    b @ b'0'..=b'9' => self.buffer.push(b as char),

                    b => return Err(DimacsParseError::UnexpectedCharacter(b as char)),
                },

                ParseState::NegativeLiteral => match byte {
                    b @ b'1'..=b'9' => {
                        self.buffer.push(b as char);
                        self.state = ParseState::Literal;
                    }

                    b => return Err(DimacsParseError::UnexpectedCharacter(b as char)),
                },

                ParseState::Clause => match byte {
                    b'0' => self.finish_clause()?,

                    // A new-line does not terminate the clause. The literals parsed so far stay
                    // in the buffer, and comments or whitespace on the next line are handled by
                    // the start-of-line state.
                    b'\n' => self.state = ParseState::StartLine,
                    b if b.is_ascii_whitespace() => {}

                    b @ b'1'..=b'9' => self.start_literal(b, ParseState::Literal),
                    b'-' => self.start_literal(b'-', ParseState::NegativeLiteral),

                    b => return Err(DimacsParseError::UnexpectedCharacter(b as char)),
                },

                ParseState::Terminator => match byte {
                    b'\n' => self.state = ParseState::StartLine,
                    b if b.is_ascii_whitespace() => self.state = ParseState::Clause,

                    b => return Err(DimacsParseError::UnexpectedCharacter(b as char)),
                },
            }
        }

        Ok(())
    }

    fn start_literal(&mut self, byte: u8, state: ParseState) {
        self.state = state;
        self.buffer.clear();
        self.buffer.push(byte as char);
    }

    fn complete(mut self) -> Result<CnfFormula, DimacsParseError> {
        // The source may end without a trailing new-line after the header or a literal.
        match self.state {
            ParseState::Header => self.init_header()?,
            ParseState::Literal => self.finish_literal()?,
            ParseState::NegativeLiteral => {
                return Err(DimacsParseError::InvalidLiteral(self.buffer.clone()))
            }
            ParseState::StartLine
            | ParseState::Comment
            | ParseState::Clause
            | ParseState::Terminator => {}
        }

        let header = self.header.ok_or(DimacsParseError::MissingHeader)?;

        if !self.clause.is_empty() {
            Err(DimacsParseError::UnterminatedClause)
        } else if header.num_clauses != self.clauses.len() {
            Err(DimacsParseError::IncorrectClauseCount {
                expected: header.num_clauses,
                parsed: self.clauses.len(),
            })
        } else {
            Ok(CnfFormula {
                num_variables: header.num_variables,
                clauses: self.clauses,
            })
        }
    }

    fn init_header(&mut self) -> Result<(), DimacsParseError> {
        if self.header.is_some() {
            return Err(DimacsParseError::DuplicateHeader);
        }

        self.header = Some(self.buffer.trim().parse::<CnfHeader>()?);

        Ok(())
    }

    fn finish_literal(&mut self) -> Result<(), DimacsParseError> {
        let header = self.header.as_ref().ok_or(DimacsParseError::MissingHeader)?;

        let literal = self
            .buffer
            .parse::<i32>()
            .ok()
            .and_then(Literal::new)
            .ok_or_else(|| DimacsParseError::InvalidLiteral(self.buffer.clone()))?;

        if literal.variable().get() > header.num_variables {
            return Err(DimacsParseError::VariableOutOfRange {
                literal: literal.get(),
                num_variables: header.num_variables,
            });
        }

        self.clause.push(literal);
        self.state = ParseState::Clause;

        Ok(())
    }

    fn finish_clause(&mut self) -> Result<(), DimacsParseError> {
        if self.header.is_none() {
            return Err(DimacsParseError::MissingHeader);
        }

        let clause =
            Clause::new(self.clause.drain(..)).map_err(|source| DimacsParseError::InvalidClause {
                index: self.clauses.len(),
                source,
            })?;

        self.clauses.push(clause);
        self.state = ParseState::Terminator;

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct CnfHeader {
    num_variables: u32,
    num_clauses: usize,
}

impl FromStr for CnfHeader {
    type Err = DimacsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with("p cnf ") {
            return Err(DimacsParseError::InvalidHeader(s.to_owned()));
        }

        let mut components = s.split_whitespace().skip(2);

        let num_variables = next_header_component::<u32>(&mut components, s)?;
        let num_clauses = next_header_component::<usize>(&mut components, s)?;

        if components.next().is_some() {
            return Err(DimacsParseError::InvalidHeader(s.to_owned()));
        }

        Ok(Self {
            num_variables,
            num_clauses,
        })
    }
}

fn next_header_component<'a, Num: FromStr>(
    components: &mut impl Iterator<Item = &'a str>,
    header: &str,
) -> Result<Num, DimacsParseError> {
    components
        .next()
        .ok_or_else(|| DimacsParseError::InvalidHeader(header.to_owned()))?
        .parse::<Num>()
        .map_err(|_| DimacsParseError::InvalidHeader(header.to_owned()))
}
