// Fri Jan 16 2026 - Alex

//! In-memory ELF64 relocatable objects and GNU `ar` archives for tests.

use std::path::{Path, PathBuf};

const EHDR_SIZE: usize = 64;
const SHDR_SIZE: usize = 64;
const SYM_SIZE: usize = 24;

const STB_LOCAL: u8 = 0;
const STB_GLOBAL: u8 = 1;
const STB_WEAK: u8 = 2;
const STT_FUNC: u8 = 2;

const SHT_PROGBITS: u32 = 1;
const SHT_SYMTAB: u32 = 2;
const SHT_STRTAB: u32 = 3;

const TEXT_INDEX: u16 = 1;

struct TestSymbol {
    name: String,
    bind: u8,
    shndx: u16,
}

pub struct ElfBuilder {
    symbols: Vec<TestSymbol>,
    symtab: bool,
}

impl ElfBuilder {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            symtab: true,
        }
    }

    fn symbol(mut self, name: &str, bind: u8, shndx: u16) -> Self {
        self.symbols.push(TestSymbol {
            name: name.to_string(),
            bind,
            shndx,
        });
        self
    }

    pub fn global_def(self, name: &str) -> Self {
        self.symbol(name, STB_GLOBAL, TEXT_INDEX)
    }

    pub fn weak_def(self, name: &str) -> Self {
        self.symbol(name, STB_WEAK, TEXT_INDEX)
    }

    pub fn global_undef(self, name: &str) -> Self {
        self.symbol(name, STB_GLOBAL, 0)
    }

    pub fn weak_undef(self, name: &str) -> Self {
        self.symbol(name, STB_WEAK, 0)
    }

    pub fn local_def(self, name: &str) -> Self {
        self.symbol(name, STB_LOCAL, TEXT_INDEX)
    }

    pub fn without_symtab(mut self) -> Self {
        self.symtab = false;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut symbols = self.symbols;
        // Locals precede globals in a well-formed symtab.
        symbols.sort_by_key(|s| s.bind != STB_LOCAL);
        let first_global = 1 + symbols.iter().filter(|s| s.bind == STB_LOCAL).count();

        let mut strtab = vec![0u8];
        let mut name_offsets = Vec::with_capacity(symbols.len());
        for sym in &symbols {
            name_offsets.push(strtab.len() as u32);
            strtab.extend_from_slice(sym.name.as_bytes());
            strtab.push(0);
        }
        pad_to(&mut strtab, 8);

        let mut symtab = vec![0u8; SYM_SIZE];
        for (sym, name) in symbols.iter().zip(&name_offsets) {
            symtab.extend_from_slice(&name.to_le_bytes());
            symtab.push((sym.bind << 4) | STT_FUNC);
            symtab.push(0);
            symtab.extend_from_slice(&sym.shndx.to_le_bytes());
            symtab.extend_from_slice(&0u64.to_le_bytes());
            symtab.extend_from_slice(&0u64.to_le_bytes());
        }

        let mut shstrtab = vec![0u8];
        let mut section_name = |name: &str| {
            let offset = shstrtab.len() as u32;
            shstrtab.extend_from_slice(name.as_bytes());
            shstrtab.push(0);
            offset
        };
        let text_name = section_name(".text");
        let symtab_name = section_name(".symtab");
        let strtab_name = section_name(".strtab");
        let shstrtab_name = section_name(".shstrtab");
        pad_to(&mut shstrtab, 8);

        let text = vec![0u8; 8];

        let mut body = Vec::new();
        let text_offset = EHDR_SIZE + body.len();
        body.extend_from_slice(&text);

        let mut sections = vec![
            SectionHeader::null(),
            SectionHeader::new(text_name, SHT_PROGBITS, text_offset, text.len()),
        ];

        if self.symtab {
            let symtab_offset = EHDR_SIZE + body.len();
            body.extend_from_slice(&symtab);
            let strtab_offset = EHDR_SIZE + body.len();
            body.extend_from_slice(&strtab);

            let mut symtab_header =
                SectionHeader::new(symtab_name, SHT_SYMTAB, symtab_offset, symtab.len());
            symtab_header.link = 3;
            symtab_header.info = first_global as u32;
            symtab_header.entsize = SYM_SIZE as u64;
            sections.push(symtab_header);
            sections.push(SectionHeader::new(strtab_name, SHT_STRTAB, strtab_offset, strtab.len()));
        }

        let shstrtab_offset = EHDR_SIZE + body.len();
        body.extend_from_slice(&shstrtab);
        sections.push(SectionHeader::new(shstrtab_name, SHT_STRTAB, shstrtab_offset, shstrtab.len()));

        let shoff = EHDR_SIZE + body.len();
        let shnum = sections.len() as u16;
        let shstrndx = shnum - 1;

        let mut out = Vec::with_capacity(shoff + sections.len() * SHDR_SIZE);
        out.extend_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0]);
        out.extend_from_slice(&[0u8; 8]);
        out.extend_from_slice(&1u16.to_le_bytes()); // ET_REL
        out.extend_from_slice(&62u16.to_le_bytes()); // EM_X86_64
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.extend_from_slice(&(shoff as u64).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&(SHDR_SIZE as u16).to_le_bytes());
        out.extend_from_slice(&shnum.to_le_bytes());
        out.extend_from_slice(&shstrndx.to_le_bytes());
        debug_assert_eq!(out.len(), EHDR_SIZE);

        out.extend_from_slice(&body);
        for section in &sections {
            section.write(&mut out);
        }
        out
    }
}

struct SectionHeader {
    name: u32,
    kind: u32,
    offset: u64,
    size: u64,
    link: u32,
    info: u32,
    entsize: u64,
}

impl SectionHeader {
    fn null() -> Self {
        Self::new(0, 0, 0, 0)
    }

    fn new(name: u32, kind: u32, offset: usize, size: usize) -> Self {
        Self {
            name,
            kind,
            offset: offset as u64,
            size: size as u64,
            link: 0,
            info: 0,
            entsize: 0,
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        let align: u64 = if self.kind == 0 { 0 } else { 8 };
        out.extend_from_slice(&self.name.to_le_bytes());
        out.extend_from_slice(&self.kind.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.extend_from_slice(&self.offset.to_le_bytes());
        out.extend_from_slice(&self.size.to_le_bytes());
        out.extend_from_slice(&self.link.to_le_bytes());
        out.extend_from_slice(&self.info.to_le_bytes());
        out.extend_from_slice(&align.to_le_bytes());
        out.extend_from_slice(&self.entsize.to_le_bytes());
    }
}

fn pad_to(buf: &mut Vec<u8>, align: usize) {
    while buf.len() % align != 0 {
        buf.push(0);
    }
}

/// GNU-style `ar` writer. Member names must fit the 15 byte short form.
pub struct ArBuilder {
    members: Vec<(String, Vec<u8>)>,
}

impl ArBuilder {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    pub fn member(mut self, name: &str, data: &[u8]) -> Self {
        assert!(name.len() < 16, "member name too long for short form: {}", name);
        self.members.push((name.to_string(), data.to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = b"!<arch>\n".to_vec();
        for (name, data) in &self.members {
            out.extend_from_slice(format!("{:<16}", format!("{}/", name)).as_bytes());
            out.extend_from_slice(format!("{:<12}", 0).as_bytes());
            out.extend_from_slice(format!("{:<6}", 0).as_bytes());
            out.extend_from_slice(format!("{:<6}", 0).as_bytes());
            out.extend_from_slice(format!("{:<8}", 644).as_bytes());
            out.extend_from_slice(format!("{:<10}", data.len()).as_bytes());
            out.extend_from_slice(b"`\n");
            out.extend_from_slice(data);
            if data.len() % 2 == 1 {
                out.push(b'\n');
            }
        }
        out
    }

    pub fn write_to(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).expect("write test archive");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_produce_goblin_readable_output() {
        let object = ElfBuilder::new().global_def("f").global_undef("g").build();
        let elf = goblin::elf::Elf::parse(&object).unwrap();
        assert_eq!(elf.syms.len(), 3);

        let data = ArBuilder::new().member("f.o", &object).build();
        let archive = goblin::archive::Archive::parse(&data).unwrap();
        assert_eq!(archive.members(), vec!["f.o"]);
        assert_eq!(archive.extract("f.o", &data).unwrap(), &object[..]);
    }
}
