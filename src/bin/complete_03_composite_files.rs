use colored::Colorize;

// =============================================================================
// Milestone 1: One capability for files and folders
// =============================================================================

/// Files (leaves) and folders (composites) render through the same
/// capability, so callers never branch on which one they hold.
pub trait FsEntry {
    fn name(&self) -> &str;
    fn render(&self, depth: usize) -> String;
}

fn indent(depth: usize) -> String {
    "   ".repeat(depth)
}

pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FsEntry for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, depth: usize) -> String {
        format!("{}- File: {}", indent(depth), self.name)
    }
}

// =============================================================================
// Milestone 2: The folder composite
// =============================================================================

pub struct Folder {
    name: String,
    children: Vec<Box<dyn FsEntry>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// A child may be a file or another folder; the composite does not care.
    pub fn add(&mut self, child: Box<dyn FsEntry>) {
        self.children.push(child);
    }

    /// Removes and returns the first child with this name, if any.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn FsEntry>> {
        let pos = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(pos))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl FsEntry for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, depth: usize) -> String {
        let mut out = format!("{}+ Folder: {}", indent(depth), self.name);
        for child in &self.children {
            out.push('\n');
            out.push_str(&child.render(depth + 1));
        }
        out
    }
}

// =============================================================================
// Milestone 3: Building and walking a tree
// =============================================================================

fn main() {
    let mut documents = Folder::new("Documents");
    documents.add(Box::new(File::new("Resume.docx")));
    documents.add(Box::new(File::new("Notes.txt")));

    let mut pictures = Folder::new("Pictures");
    pictures.add(Box::new(File::new("Photo.jpg")));

    let mut root = Folder::new("Root");
    root.add(Box::new(documents));
    root.add(Box::new(pictures));

    println!("{}", "=== File Tree ===".bold().cyan());
    println!("{}", root.render(0));

    println!("\n{}", "=== After Removing Pictures ===".bold().cyan());
    root.remove("Pictures");
    println!("{}", root.render(0));
}
