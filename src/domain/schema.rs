//! Table and column metadata driving the generic repository and the console.

/// Storage and input type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    /// Stored as `YYYY-MM-DD` text.
    Date,
}

#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    /// Table heading.
    pub header: &'static str,
    /// Prompt phrase, e.g. "name of the enclosure".
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub id_column: &'static str,
    /// Data columns in insert order, excluding the id.
    pub columns: &'static [Column],
    /// Lowercase noun used in messages ("enclosure").
    pub singular: &'static str,
    pub plural: &'static str,
}

impl Table {
    pub fn select_all_sql(&self) -> String {
        self.select_sql(None)
    }

    /// Id plus data columns of rows matching `condition`, ordered by id.
    pub fn select_where_sql(&self, condition: &str) -> String {
        self.select_sql(Some(condition))
    }

    pub fn select_by_id_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            self.column_list(),
            self.name,
            self.id_column
        )
    }

    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            self.column_list(),
            placeholders.join(", ")
        )
    }

    /// The id binds last, after every data column.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ?{}", c.name, i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            self.name,
            assignments.join(", "),
            self.id_column,
            self.columns.len() + 1
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = ?1", self.name, self.id_column)
    }

    /// "ID" followed by every column heading.
    pub fn headers(&self) -> Vec<&'static str> {
        std::iter::once("ID")
            .chain(self.columns.iter().map(|c| c.header))
            .collect()
    }

    fn select_sql(&self, condition: Option<&str>) -> String {
        let filter = condition.map(|c| format!(" WHERE {}", c)).unwrap_or_default();
        format!(
            "SELECT {}, {} FROM {}{} ORDER BY {}",
            self.id_column,
            self.column_list(),
            self.name,
            filter,
            self.id_column
        )
    }

    fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const ENCLOSURE: Table = Table {
    name: "enclosure",
    id_column: "enclosure_id",
    columns: &[
        Column {
            name: "name",
            header: "Name",
            label: "name of the enclosure",
            kind: FieldKind::Text,
        },
        Column {
            name: "size",
            header: "Size",
            label: "size of the enclosure in m2",
            kind: FieldKind::Integer,
        },
    ],
    singular: "enclosure",
    plural: "enclosures",
};

pub const CATEGORY: Table = Table {
    name: "animal_category",
    id_column: "category_id",
    columns: &[Column {
        name: "category",
        header: "Category",
        label: "name of the category",
        kind: FieldKind::Text,
    }],
    singular: "category",
    plural: "categories",
};

pub const BREED: Table = Table {
    name: "animal_breed",
    id_column: "breed_id",
    columns: &[
        Column {
            name: "breed",
            header: "Breed",
            label: "name of the breed",
            kind: FieldKind::Text,
        },
        Column {
            name: "category_id",
            header: "Category ID",
            label: "ID of the associated category",
            kind: FieldKind::Integer,
        },
    ],
    singular: "breed",
    plural: "breeds",
};

pub const KEEPER: Table = Table {
    name: "keeper",
    id_column: "keeper_id",
    columns: &[
        Column {
            name: "name",
            header: "Name",
            label: "name of the keeper",
            kind: FieldKind::Text,
        },
        Column {
            name: "enclosure_id",
            header: "Enclosure ID",
            label: "ID of the enclosure",
            kind: FieldKind::Integer,
        },
    ],
    singular: "keeper",
    plural: "keepers",
};

pub const ANIMAL: Table = Table {
    name: "animal",
    id_column: "animal_id",
    columns: &[
        Column {
            name: "name",
            header: "Name",
            label: "name of the animal",
            kind: FieldKind::Text,
        },
        Column {
            name: "birthday",
            header: "Birthday",
            label: "birthday of the animal (YYYY-MM-DD)",
            kind: FieldKind::Date,
        },
        Column {
            name: "breed_id",
            header: "Breed ID",
            label: "ID of the animal breed",
            kind: FieldKind::Integer,
        },
        Column {
            name: "enclosure_id",
            header: "Enclosure ID",
            label: "ID of the enclosure",
            kind: FieldKind::Integer,
        },
    ],
    singular: "animal",
    plural: "animals",
};
