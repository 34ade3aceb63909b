// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::ids::{IdError, StepId};

use super::grid::{GridCoord, ParseGridCoordError};

/// What a tile represents: a workflow step, the fork diamond, or a
/// connector glyph (including the empty placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Node,
    Fork,
    Connector,
}

impl TileKind {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Fork => "fork",
            Self::Connector => "connector",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "node" => Some(Self::Node),
            "fork" => Some(Self::Fork),
            "connector" => Some(Self::Connector),
            _ => None,
        }
    }
}

/// The visual container a column renders its tiles in. Fixed per column at
/// allocation time: diamond for the fork column, box for other node
/// columns, standard for connector columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileContainer {
    Box,
    Diamond,
    Standard,
}

impl TileContainer {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Diamond => "diamond",
            Self::Standard => "standard",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "box" => Some(Self::Box),
            "diamond" => Some(Self::Diamond),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// Connector glyphs, named after the direction they draw. `Empty` is the
/// placeholder every cell starts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectorKind {
    Empty,
    LineHoriz,
    ArrowRight,
    DownRight,
    RightUp,
    RightUpArrow,
    LineVert,
    ArrowUp,
    DownRightDash,
}

impl ConnectorKind {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::LineHoriz => "lineHoriz",
            Self::ArrowRight => "arrowRight",
            Self::DownRight => "downRight",
            Self::RightUp => "rightUp",
            Self::RightUpArrow => "rightUpArrow",
            Self::LineVert => "lineVert",
            Self::ArrowUp => "arrowUp",
            Self::DownRightDash => "downRightDash",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "empty" => Some(Self::Empty),
            "lineHoriz" => Some(Self::LineHoriz),
            "arrowRight" => Some(Self::ArrowRight),
            "downRight" => Some(Self::DownRight),
            "rightUp" => Some(Self::RightUp),
            "rightUpArrow" => Some(Self::RightUpArrow),
            "lineVert" => Some(Self::LineVert),
            "arrowUp" => Some(Self::ArrowUp),
            "downRightDash" => Some(Self::DownRightDash),
            _ => None,
        }
    }
}

/// The identity slot of a tile: the step id for node/fork tiles, the
/// connector token otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileId {
    Step(StepId),
    Connector(ConnectorKind),
}

impl TileId {
    pub fn as_step(&self) -> Option<&StepId> {
        match self {
            Self::Step(id) => Some(id),
            Self::Connector(_) => None,
        }
    }

    pub fn as_connector(&self) -> Option<ConnectorKind> {
        match self {
            Self::Step(_) => None,
            Self::Connector(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(id) => write!(f, "{id}"),
            Self::Connector(kind) => f.write_str(kind.as_token()),
        }
    }
}

/// One cell of the matrix.
///
/// Canonical form: `<kind>|<container>|<id>|<own>[|<parent>]`. The parent
/// coordinate is omitted entirely when absent; when present it marks the
/// tile as an attachment point for the rendering layer's "insert step"
/// control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tile {
    kind: TileKind,
    container: TileContainer,
    id: TileId,
    own_coord: GridCoord,
    parent_coord: Option<GridCoord>,
}

impl Tile {
    /// The empty connector tile every cell is initialized to.
    pub fn placeholder(container: TileContainer, own_coord: GridCoord) -> Self {
        Self {
            kind: TileKind::Connector,
            container,
            id: TileId::Connector(ConnectorKind::Empty),
            own_coord,
            parent_coord: None,
        }
    }

    /// A placed step tile. Diamond columns hold fork tiles, all other node
    /// columns hold plain node tiles.
    pub fn node(step_id: StepId, container: TileContainer, own_coord: GridCoord) -> Self {
        let kind = if container == TileContainer::Diamond {
            TileKind::Fork
        } else {
            TileKind::Node
        };
        Self {
            kind,
            container,
            id: TileId::Step(step_id),
            own_coord,
            parent_coord: None,
        }
    }

    pub fn connector(
        connector: ConnectorKind,
        container: TileContainer,
        own_coord: GridCoord,
        parent_coord: Option<GridCoord>,
    ) -> Self {
        Self {
            kind: TileKind::Connector,
            container,
            id: TileId::Connector(connector),
            own_coord,
            parent_coord,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn container(&self) -> TileContainer {
        self.container
    }

    pub fn id(&self) -> &TileId {
        &self.id
    }

    pub fn own_coord(&self) -> GridCoord {
        self.own_coord
    }

    pub fn parent_coord(&self) -> Option<GridCoord> {
        self.parent_coord
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == TileKind::Connector && self.id == TileId::Connector(ConnectorKind::Empty)
    }

    pub fn parse(input: &str) -> Result<Self, ParseTileError> {
        let mut fields = input.split('|');

        let kind_str = fields.next().ok_or(ParseTileError::MissingKind)?;
        let kind = TileKind::from_token(kind_str)
            .ok_or_else(|| ParseTileError::UnknownKind(kind_str.to_owned()))?;

        let container_str = fields.next().ok_or(ParseTileError::MissingContainer)?;
        let container = TileContainer::from_token(container_str)
            .ok_or_else(|| ParseTileError::UnknownContainer(container_str.to_owned()))?;

        let id_str = fields.next().ok_or(ParseTileError::MissingId)?;
        let id = match kind {
            TileKind::Connector => TileId::Connector(
                ConnectorKind::from_token(id_str)
                    .ok_or_else(|| ParseTileError::UnknownConnector(id_str.to_owned()))?,
            ),
            TileKind::Node | TileKind::Fork => TileId::Step(
                StepId::new(id_str.to_owned()).map_err(ParseTileError::InvalidStepId)?,
            ),
        };

        let own_str = fields.next().ok_or(ParseTileError::MissingOwnCoord)?;
        let own_coord = GridCoord::parse(own_str).map_err(ParseTileError::InvalidOwnCoord)?;

        let parent_coord = match fields.next() {
            Some(parent_str) => {
                Some(GridCoord::parse(parent_str).map_err(ParseTileError::InvalidParentCoord)?)
            }
            None => None,
        };

        if let Some(extra) = fields.next() {
            return Err(ParseTileError::TrailingField(extra.to_owned()));
        }

        Ok(Self {
            kind,
            container,
            id,
            own_coord,
            parent_coord,
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.kind.as_token(),
            self.container.as_token(),
            self.id,
            self.own_coord
        )?;
        if let Some(parent) = self.parent_coord {
            write!(f, "|{parent}")?;
        }
        Ok(())
    }
}

impl FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

impl TryFrom<String> for Tile {
    type Error = ParseTileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTileError {
    MissingKind,
    MissingContainer,
    MissingId,
    MissingOwnCoord,
    UnknownKind(String),
    UnknownContainer(String),
    UnknownConnector(String),
    InvalidStepId(IdError),
    InvalidOwnCoord(ParseGridCoordError),
    InvalidParentCoord(ParseGridCoordError),
    TrailingField(String),
}

impl fmt::Display for ParseTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKind => f.write_str("tile is missing its kind field"),
            Self::MissingContainer => f.write_str("tile is missing its container field"),
            Self::MissingId => f.write_str("tile is missing its id field"),
            Self::MissingOwnCoord => f.write_str("tile is missing its own coordinate"),
            Self::UnknownKind(token) => write!(f, "unknown tile kind '{token}'"),
            Self::UnknownContainer(token) => write!(f, "unknown tile container '{token}'"),
            Self::UnknownConnector(token) => write!(f, "unknown connector '{token}'"),
            Self::InvalidStepId(err) => write!(f, "invalid step id: {err}"),
            Self::InvalidOwnCoord(err) => write!(f, "invalid own coordinate: {err}"),
            Self::InvalidParentCoord(err) => write!(f, "invalid parent coordinate: {err}"),
            Self::TrailingField(token) => write!(f, "unexpected trailing field '{token}'"),
        }
    }
}

impl std::error::Error for ParseTileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidStepId(err) => Some(err),
            Self::InvalidOwnCoord(err) | Self::InvalidParentCoord(err) => Some(err),
            _ => None,
        }
    }
}
