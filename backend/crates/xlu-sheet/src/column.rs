/// A field of [`SheetRow`](xlu_core::SheetRow) that can occupy a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Username,
    City,
    Email,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Username => "username",
            Column::City => "city",
            Column::Email => "email",
        }
    }
}

/// Ordered column positions plus the header text written for each.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    columns: &'static [(Column, &'static str)],
}

impl ColumnLayout {
    pub const fn new(columns: &'static [(Column, &'static str)]) -> Self {
        Self { columns }
    }

    /// Columns in position order, starting at column 0.
    pub fn columns(&self) -> impl Iterator<Item = (u16, Column)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, (column, _))| (idx as u16, *column))
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(_, header)| *header)
    }
}

pub const USER_LAYOUT: ColumnLayout = ColumnLayout::new(&[
    (Column::Id, "ID"),
    (Column::Username, "Username"),
    (Column::City, "City"),
    (Column::Email, "Email"),
]);
