/// JDK types known without any class list, as binary names.
pub const BUILTIN_TYPES: &[&str] = &[
    // java.lang
    "java.lang.AutoCloseable",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.CharSequence",
    "java.lang.Class",
    "java.lang.ClassCastException",
    "java.lang.ClassNotFoundException",
    "java.lang.Cloneable",
    "java.lang.Comparable",
    "java.lang.Deprecated",
    "java.lang.Double",
    "java.lang.Enum",
    "java.lang.Error",
    "java.lang.Exception",
    "java.lang.Float",
    "java.lang.FunctionalInterface",
    "java.lang.IllegalArgumentException",
    "java.lang.IllegalStateException",
    "java.lang.IndexOutOfBoundsException",
    "java.lang.Integer",
    "java.lang.InterruptedException",
    "java.lang.Iterable",
    "java.lang.Long",
    "java.lang.Math",
    "java.lang.NullPointerException",
    "java.lang.Number",
    "java.lang.NumberFormatException",
    "java.lang.Object",
    "java.lang.Override",
    "java.lang.Process",
    "java.lang.ProcessBuilder",
    "java.lang.Runnable",
    "java.lang.Runtime",
    "java.lang.RuntimeException",
    "java.lang.Short",
    "java.lang.StackOverflowError",
    "java.lang.String",
    "java.lang.StringBuffer",
    "java.lang.StringBuilder",
    "java.lang.SuppressWarnings",
    "java.lang.System",
    "java.lang.Thread",
    "java.lang.Thread$State",
    "java.lang.ThreadLocal",
    "java.lang.Throwable",
    "java.lang.UnsupportedOperationException",
    "java.lang.Void",
    // java.util
    "java.util.AbstractList",
    "java.util.AbstractMap",
    "java.util.ArrayDeque",
    "java.util.ArrayList",
    "java.util.Arrays",
    "java.util.BitSet",
    "java.util.Calendar",
    "java.util.Collection",
    "java.util.Collections",
    "java.util.Comparator",
    "java.util.ConcurrentModificationException",
    "java.util.Date",
    "java.util.Deque",
    "java.util.EnumMap",
    "java.util.EnumSet",
    "java.util.HashMap",
    "java.util.HashSet",
    "java.util.Iterator",
    "java.util.LinkedHashMap",
    "java.util.LinkedHashSet",
    "java.util.LinkedList",
    "java.util.List",
    "java.util.ListIterator",
    "java.util.Locale",
    "java.util.Map",
    "java.util.Map$Entry",
    "java.util.NavigableMap",
    "java.util.NoSuchElementException",
    "java.util.Objects",
    "java.util.Optional",
    "java.util.PriorityQueue",
    "java.util.Properties",
    "java.util.Queue",
    "java.util.Random",
    "java.util.Scanner",
    "java.util.Set",
    "java.util.SortedMap",
    "java.util.SortedSet",
    "java.util.Stack",
    "java.util.StringJoiner",
    "java.util.StringTokenizer",
    "java.util.TreeMap",
    "java.util.TreeSet",
    "java.util.UUID",
    "java.util.Vector",
    "java.util.concurrent.Callable",
    "java.util.concurrent.CompletableFuture",
    "java.util.concurrent.ConcurrentHashMap",
    "java.util.concurrent.ExecutorService",
    "java.util.concurrent.Executors",
    "java.util.concurrent.Future",
    "java.util.concurrent.TimeUnit",
    "java.util.concurrent.atomic.AtomicInteger",
    "java.util.concurrent.atomic.AtomicLong",
    "java.util.function.BiFunction",
    "java.util.function.Consumer",
    "java.util.function.Function",
    "java.util.function.Predicate",
    "java.util.function.Supplier",
    "java.util.regex.Matcher",
    "java.util.regex.Pattern",
    "java.util.stream.Collectors",
    "java.util.stream.IntStream",
    "java.util.stream.Stream",
    // java.io
    "java.io.BufferedReader",
    "java.io.BufferedWriter",
    "java.io.ByteArrayInputStream",
    "java.io.ByteArrayOutputStream",
    "java.io.Closeable",
    "java.io.File",
    "java.io.FileInputStream",
    "java.io.FileNotFoundException",
    "java.io.FileOutputStream",
    "java.io.FileReader",
    "java.io.FileWriter",
    "java.io.IOException",
    "java.io.InputStream",
    "java.io.InputStreamReader",
    "java.io.OutputStream",
    "java.io.PrintStream",
    "java.io.PrintWriter",
    "java.io.Reader",
    "java.io.Serializable",
    "java.io.StringReader",
    "java.io.StringWriter",
    "java.io.UncheckedIOException",
    "java.io.Writer",
    // java.nio
    "java.nio.ByteBuffer",
    "java.nio.charset.Charset",
    "java.nio.charset.StandardCharsets",
    "java.nio.file.Files",
    "java.nio.file.Path",
    "java.nio.file.Paths",
    // java.net
    "java.net.HttpURLConnection",
    "java.net.Socket",
    "java.net.URI",
    "java.net.URISyntaxException",
    "java.net.URL",
    // java.math / java.text / java.time
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.text.DateFormat",
    "java.text.SimpleDateFormat",
    "java.time.Duration",
    "java.time.Instant",
    "java.time.LocalDate",
    "java.time.LocalDateTime",
    "java.time.ZonedDateTime",
    // javax / java.awt
    "java.awt.Color",
    "java.awt.Desktop",
    "javax.swing.JFrame",
    "javax.swing.JPanel",
];
