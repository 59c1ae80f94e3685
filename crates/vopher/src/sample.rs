pub const SAMPLE: &str = "\
# sample vopher.list file
# a comment starts with a '#', the whole line gets ignored.
# empty lines are ignored as well.
# every plugin needs its own name, it is the folder below --dir.

# fetch tpope's 'vim-fugitive' plugin, the master branch, and place the
# content of the zip-file into --dir <folder>/vim-fugitive.
https://github.com/tpope/vim-fugitive

# grab the tagged release 'v2.1' instead of 'master' and place it
# under --dir <folder>/fugitive-2.1.
fugitive-2.1 https://github.com/tpope/vim-fugitive#v2.1

# do not strip any directories from the filenames in the archive. the
# default is to strip the first directory name.
surround https://github.com/tpope/vim-surround strip=0

# any tar, tar.gz, tar.bz2, zip or vimball url works; an expected sha1 or
# sha256 digest makes the download fail when the bytes differ.
align https://example.org/vim/Align.vba.gz strip=0 sha1=2aae6c35c94fcfb415dbe95f408b9ce91ee846ed
";
